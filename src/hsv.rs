use std::fmt;

use crate::{helper::clamp, hsl::hue_max_min, types::Scalar, Color, Format, Hsl};

/// Hue (in degrees), saturation and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: Scalar,
    pub s: Scalar,
    pub v: Scalar,
}

impl From<&Hsv> for Color {
    fn from(color: &Hsv) -> Self {
        let s = clamp(0.0, 1.0, color.s);
        let v = clamp(0.0, 1.0, color.v);

        let lightness = v * (1.0 - s / 2.0);
        let saturation = if lightness > 0.0 && lightness < 1.0 {
            (v - lightness) / lightness.min(1.0 - lightness)
        } else {
            0.0
        };

        Color::from(&Hsl::new(color.h, saturation, lightness))
    }
}

impl From<&Color> for Hsv {
    fn from(color: &Color) -> Self {
        let (hue, max_chroma, min_chroma) = hue_max_min(color.r, color.g, color.b);

        let saturation = if max_chroma > 0.0 {
            (max_chroma - min_chroma) / max_chroma
        } else {
            0.0
        };

        Hsv {
            h: hue,
            s: saturation,
            v: max_chroma,
        }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({h}, {s}, {v})", h = self.h, s = self.s, v = self.v)
    }
}

impl Hsv {
    #[inline]
    pub fn new(h: Scalar, s: Scalar, v: Scalar) -> Self {
        Hsv { h, s, v }
    }

    /// Format the color as a HSV-representation string (`hsv(123, 50.3%, 80.1%)`).
    pub fn to_color_string(&self, format: Format) -> String {
        let space = if format == Format::Spaces { " " } else { "" };
        format!(
            "hsv({h:.0},{space}{s:.1}%,{space}{v:.1}%)",
            space = space,
            h = self.h,
            s = 100.0 * self.s,
            v = 100.0 * self.v,
        )
    }
}
