use std::fmt;

use crate::{
    convert::{lab_to_xyz, xyz_to_lab},
    helper::MaxPrecision,
    types::Scalar,
    Color, Format, Xyz,
};

/// CIE L*a*b* coordinates relative to the D65 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: Scalar,
    pub a: Scalar,
    pub b: Scalar,
}

impl From<&Color> for Lab {
    fn from(color: &Color) -> Self {
        let Xyz { x, y, z } = Xyz::from(color);
        let [l, a, b] = xyz_to_lab([x, y, z]);
        Lab { l, a, b }
    }
}

impl From<&Lab> for Color {
    fn from(color: &Lab) -> Self {
        let [x, y, z] = lab_to_xyz([color.l, color.a, color.b]);
        Self::from(&Xyz::new(x, y, z))
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lab({l}, {a}, {b})", l = self.l, a = self.a, b = self.b,)
    }
}

impl Lab {
    #[inline]
    pub fn new(l: Scalar, a: Scalar, b: Scalar) -> Self {
        Lab { l, a, b }
    }

    /// Format the color as a Lab-representation string (`Lab(41, 83, -93)`).
    pub fn to_color_string(&self, format: Format) -> String {
        let space = if format == Format::Spaces { " " } else { "" };
        format!(
            "Lab({l},{space}{a},{space}{b})",
            l = MaxPrecision::wrap(2, self.l),
            a = MaxPrecision::wrap(2, self.a),
            b = MaxPrecision::wrap(2, self.b),
            space = space,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::assert_almost_equal;
    use approx::assert_relative_eq;

    #[test]
    fn lab_conversion() {
        assert_eq!(Color::red(), Color::from_lab(53.24, 80.09, 67.2));

        let red = Color::red().to_lab();
        assert_relative_eq!(53.24, red.l, max_relative = 0.001);
        assert_relative_eq!(80.09, red.a, max_relative = 0.001);
        assert_relative_eq!(67.20, red.b, max_relative = 0.001);

        let roundtrip = |h, s, l| {
            let color1 = Color::from_hsl(h, s, l);
            let lab1 = color1.to_lab();
            let color2 = Color::from_lab(lab1.l, lab1.a, lab1.b);
            assert_almost_equal(&color1, &color2);
        };

        for hue in 0..360 {
            roundtrip(Scalar::from(hue), 0.2, 0.8);
        }
    }

    #[test]
    fn to_color_string() {
        let c = Lab::new(41.0, 83.0, -93.0);
        assert_eq!("Lab(41, 83, -93)", c.to_color_string(Format::Spaces));
        assert_eq!("Lab(41,83,-93)", c.to_color_string(Format::NoSpaces));
        assert_eq!("Lab(41.13,8,0)", Lab::new(41.126, 8.0, 0.0).to_color_string(Format::NoSpaces));
    }
}
