use std::fmt;

use crate::{
    convert::{srgb_to_xyz, xyz_to_srgb},
    types::Scalar,
    Color,
};

/// CIE 1931 XYZ tristimulus values, D65-adapted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl From<&Color> for Xyz {
    fn from(color: &Color) -> Self {
        let [x, y, z] = srgb_to_xyz([color.r, color.g, color.b]);
        Xyz { x, y, z }
    }
}

impl From<&Xyz> for Color {
    fn from(color: &Xyz) -> Self {
        let [r, g, b] = xyz_to_srgb([color.x, color.y, color.z]);
        Color::from_rgb_float(r, g, b)
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XYZ({x}, {y}, {z})", x = self.x, y = self.y, z = self.z,)
    }
}

impl Xyz {
    #[inline]
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Xyz { x, y, z }
    }
}
