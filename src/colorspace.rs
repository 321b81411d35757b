use crate::{Color, Hsl, Hsv, Lab, Luv, Rgb};

/// A color representation that can be expressed in, and rebuilt from, every
/// space the interpolation engine blends in.
///
/// The engine never looks inside an implementor. The conversions are expected
/// to be total and to round-trip for values within each space's natural domain
/// (hue in degrees, saturation/value/lightness in [0, 1], Luv and Lab
/// unconstrained).
pub trait ColorModel: Sized {
    fn to_rgb(&self) -> Rgb;
    fn from_rgb(rgb: Rgb) -> Self;

    fn to_hsv(&self) -> Hsv;
    fn from_hsv(hsv: Hsv) -> Self;

    fn to_hsl(&self) -> Hsl;
    fn from_hsl(hsl: Hsl) -> Self;

    fn to_luv(&self) -> Luv;
    fn from_luv(luv: Luv) -> Self;

    fn to_lab(&self) -> Lab;
    fn from_lab(lab: Lab) -> Self;
}

impl ColorModel for Color {
    fn to_rgb(&self) -> Rgb {
        Rgb::from(self)
    }

    fn from_rgb(rgb: Rgb) -> Self {
        Color::from(&rgb)
    }

    fn to_hsv(&self) -> Hsv {
        Hsv::from(self)
    }

    fn from_hsv(hsv: Hsv) -> Self {
        Color::from(&hsv)
    }

    fn to_hsl(&self) -> Hsl {
        Hsl::from(self)
    }

    fn from_hsl(hsl: Hsl) -> Self {
        Color::from(&hsl)
    }

    fn to_luv(&self) -> Luv {
        Luv::from(self)
    }

    fn from_luv(luv: Luv) -> Self {
        Color::from(&luv)
    }

    fn to_lab(&self) -> Lab {
        Lab::from(self)
    }

    fn from_lab(lab: Lab) -> Self {
        Color::from(&lab)
    }
}
