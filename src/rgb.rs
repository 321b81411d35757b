use std::fmt;

use crate::{helper::MaxPrecision, types::Scalar, Color, Format};

/// Gamma-encoded sRGB components. In-gamut values are in the range [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
}

impl From<&Color> for Rgb {
    fn from(color: &Color) -> Self {
        Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

impl From<&Rgb> for Color {
    fn from(color: &Rgb) -> Self {
        Color::from_rgb_float(color.r, color.g, color.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({r}, {g}, {b})", r = self.r, g = self.g, b = self.b,)
    }
}

impl Rgb {
    #[inline]
    pub fn new(r: Scalar, g: Scalar, b: Scalar) -> Self {
        Rgb { r, g, b }
    }

    /// Quantize the components to integers between 0 and 255.
    pub fn to_u8(&self) -> [u8; 3] {
        // Tiny rounding errors in `f64` floating point calculations can cause effectively equal
        // values to round to different integers.  We expect `f64` rounding errors to be less than
        // the precision of an `f32` in most cases, so we can eliminate many of these rounding
        // anomalies by first converting the values to `f32` before rounding.
        let q = |c: Scalar| f32::round((255.0 * c) as f32) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Format the color as a floating point RGB-representation string (`rgb(1, 0.5, 0)`).
    pub fn to_color_string(&self, format: Format) -> String {
        let space = if format == Format::Spaces { " " } else { "" };
        format!(
            "rgb({r},{space}{g},{space}{b})",
            space = space,
            r = MaxPrecision::wrap(3, self.r),
            g = MaxPrecision::wrap(3, self.g),
            b = MaxPrecision::wrap(3, self.b),
        )
    }

    /// Format the color as a RGB-representation string (`#fc0070`).
    pub fn to_hex_string(&self, leading_hash: bool) -> String {
        let [r, g, b] = self.to_u8();
        format!(
            "{}{:02x}{:02x}{:02x}",
            if leading_hash { "#" } else { "" },
            r,
            g,
            b,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_u8_rounds_components() {
        assert_eq!([255, 128, 0], Rgb::new(1.0, 0.5, 0.0).to_u8());
        assert_eq!([1, 2, 3], Rgb::new(1.0 / 255.0, 2.0 / 255.0, 3.0 / 255.0).to_u8());
    }

    #[test]
    fn to_hex_string() {
        let c = Rgb::new(252.0 / 255.0, 0.0, 112.0 / 255.0);
        assert_eq!("#fc0070", c.to_hex_string(true));
        assert_eq!("fc0070", c.to_hex_string(false));
    }

    #[test]
    fn to_color_string() {
        let c = Rgb::new(1.0, 0.5, 0.0);
        assert_eq!("rgb(1, 0.5, 0)", c.to_color_string(Format::Spaces));
        assert_eq!("rgb(1,0.5,0)", c.to_color_string(Format::NoSpaces));
    }

    #[test]
    fn color_roundtrip_is_exact_in_gamut() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(rgb, Rgb::from(&Color::from(&rgb)));
    }
}
