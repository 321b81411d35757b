use std::fmt;

use crate::{
    helper::{clamp, mod_positive},
    types::Scalar,
    Color, Format,
};

/// Hue (in degrees), saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: Scalar,
    pub s: Scalar,
    pub l: Scalar,
}

/// Hue in degrees [0, 360), maximum and minimum component of an RGB triple.
pub(crate) fn hue_max_min(r: Scalar, g: Scalar, b: Scalar) -> (Scalar, Scalar, Scalar) {
    const EPS: f64 = f64::EPSILON * 2.0;

    let max_chroma = f64::max(f64::max(r, g), b);
    let min_chroma = f64::min(f64::min(r, g), b);

    let chroma = max_chroma - min_chroma;

    let hue = 60.0
        * (if chroma.abs() < EPS {
            0.0
        } else if r == max_chroma {
            mod_positive((g - b) / chroma, 6.0)
        } else if g == max_chroma {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        });

    (hue, max_chroma, min_chroma)
}

impl From<&Color> for Hsl {
    fn from(color: &Color) -> Self {
        const EPS: f64 = f64::EPSILON * 2.0;

        let (hue, max_chroma, min_chroma) = hue_max_min(color.r, color.g, color.b);
        let chroma = max_chroma - min_chroma;

        let lightness = (max_chroma + min_chroma) / 2.0;
        let saturation = if chroma.abs() < EPS {
            0.0
        } else {
            chroma / (1.0 - Scalar::abs(2.0 * lightness - 1.0))
        };

        Hsl {
            h: hue,
            s: saturation,
            l: lightness,
        }
    }
}

impl From<&Hsl> for Color {
    fn from(color: &Hsl) -> Self {
        let saturation = clamp(0.0, 1.0, color.s);
        let lightness = clamp(0.0, 1.0, color.l);

        let h_s = mod_positive(color.h, 360.0) / 60.0;
        let chr = (1.0 - Scalar::abs(2.0 * lightness - 1.0)) * saturation;
        let m = lightness - chr / 2.0;
        let x = chr * (1.0 - Scalar::abs(h_s % 2.0 - 1.0));

        let (r, g, b) = if h_s < 1.0 {
            (chr, x, 0.0)
        } else if (1.0..2.0).contains(&h_s) {
            (x, chr, 0.0)
        } else if (2.0..3.0).contains(&h_s) {
            (0.0, chr, x)
        } else if (3.0..4.0).contains(&h_s) {
            (0.0, x, chr)
        } else if (4.0..5.0).contains(&h_s) {
            (x, 0.0, chr)
        } else {
            (chr, 0.0, x)
        };

        Color::from_rgb_float(r + m, g + m, b + m)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({h}, {s}, {l})", h = self.h, s = self.s, l = self.l,)
    }
}

impl Hsl {
    #[inline]
    pub fn new(h: Scalar, s: Scalar, l: Scalar) -> Self {
        Hsl { h, s, l }
    }

    /// Format the color as a HSL-representation string (`hsl(123, 50.3%, 80.1%)`).
    pub fn to_color_string(&self, format: Format) -> String {
        let space = if format == Format::Spaces { " " } else { "" };
        format!(
            "hsl({h:.0},{space}{s:.1}%,{space}{l:.1}%)",
            space = space,
            h = self.h,
            s = 100.0 * self.s,
            l = 100.0 * self.l,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::assert_almost_equal;
    use approx::assert_relative_eq;

    #[test]
    fn to_color_string() {
        let c = Hsl::new(91.3, 0.541, 0.983);
        assert_eq!("hsl(91, 54.1%, 98.3%)", c.to_color_string(Format::Spaces));
        assert_eq!("hsl(91,54.1%,98.3%)", c.to_color_string(Format::NoSpaces));
    }

    #[test]
    fn primaries() {
        let red = Color::red().to_hsl();
        assert_relative_eq!(0.0, red.h);
        assert_relative_eq!(1.0, red.s);
        assert_relative_eq!(0.5, red.l);

        assert_relative_eq!(120.0, Color::lime().to_hsl().h);
        assert_relative_eq!(240.0, Color::blue().to_hsl().h);
    }

    #[test]
    fn hue_is_normalized_on_the_way_back() {
        assert_eq!(Color::from_hsl(120.0, 0.3, 0.5), Color::from_hsl(480.0, 0.3, 0.5));
        assert_eq!(Color::from_hsl(350.0, 0.3, 0.5), Color::from_hsl(-10.0, 0.3, 0.5));
    }

    #[test]
    fn hsl_conversion() {
        let roundtrip = |r, g, b| {
            let color1 = Color::from_rgb(r, g, b);
            let hsl = color1.to_hsl();
            let color2 = Color::from_hsl(hsl.h, hsl.s, hsl.l);
            assert_almost_equal(&color1, &color2);
        };

        for i in 0..=255u8 {
            roundtrip(i, 255 - i, i / 2);
        }
    }
}
