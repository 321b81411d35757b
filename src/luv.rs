use std::fmt;

use crate::{
    convert::{luv_to_xyz, xyz_to_luv},
    helper::MaxPrecision,
    types::Scalar,
    Color, Format, Xyz,
};

/// CIE L*u*v* coordinates relative to the D65 white point.
///
/// See: <https://en.wikipedia.org/wiki/CIELUV>
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    pub l: Scalar,
    pub u: Scalar,
    pub v: Scalar,
}

impl From<&Color> for Luv {
    fn from(color: &Color) -> Self {
        let Xyz { x, y, z } = Xyz::from(color);
        let [l, u, v] = xyz_to_luv([x, y, z]);
        Luv { l, u, v }
    }
}

impl From<&Luv> for Color {
    fn from(color: &Luv) -> Self {
        let [x, y, z] = luv_to_xyz([color.l, color.u, color.v]);
        Self::from(&Xyz::new(x, y, z))
    }
}

impl fmt::Display for Luv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Luv({l}, {u}, {v})", l = self.l, u = self.u, v = self.v,)
    }
}

impl Luv {
    #[inline]
    pub fn new(l: Scalar, u: Scalar, v: Scalar) -> Self {
        Luv { l, u, v }
    }

    /// Format the color as a Luv-representation string (`Luv(53.24, 175.01, 37.76)`).
    pub fn to_color_string(&self, format: Format) -> String {
        let space = if format == Format::Spaces { " " } else { "" };
        format!(
            "Luv({l},{space}{u},{space}{v})",
            l = MaxPrecision::wrap(2, self.l),
            u = MaxPrecision::wrap(2, self.u),
            v = MaxPrecision::wrap(2, self.v),
            space = space,
        )
    }
}
