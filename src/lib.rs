//! Mix two colors in a chosen color space.
//!
//! The interpolation engine ([`interpolate()`], [`mix`]) is generic over any
//! [`ColorModel`]; [`Color`] is the sRGB implementation shipped with the crate.

pub mod colorspace;
pub mod convert;
pub mod error;
mod helper;
pub mod hsl;
pub mod hsv;
pub mod interpolate;
pub mod lab;
pub mod luv;
pub mod matrix;
pub mod mix;
pub mod rgb;
mod types;
pub mod xyz;

#[cfg(test)]
mod test_helper;

use std::fmt;

// Re-export color space types
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use luv::Luv;
pub use rgb::Rgb;
pub use xyz::Xyz;

pub use colorspace::ColorModel;
pub use error::{Error, Result};
pub use interpolate::{interpolate, Arg, Options, Space};
pub use types::Scalar;

use helper::clamp;

/// The representation of a color.
///
/// Note:
/// - Colors outside the sRGB gamut (which cannot be displayed on a typical
///   computer screen) can not be represented by `Color`. Components are clamped
///   to [0, 1] when a `Color` is created; undefined (NaN) components become 0.
/// - The `PartialEq` instance compares two `Color`s by comparing their (integer)
///   RGB values.
#[derive(Clone)]
pub struct Color {
    r: Scalar,
    g: Scalar,
    b: Scalar,
}

fn gamut(c: Scalar) -> Scalar {
    if c.is_nan() {
        0.0
    } else {
        clamp(0.0, 1.0, c)
    }
}

impl Color {
    /// Create a `Color` from integer RGB values between 0 and 255.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Self::from_rgb_float(
            Scalar::from(r) / 255.0,
            Scalar::from(g) / 255.0,
            Scalar::from(b) / 255.0,
        )
    }

    /// Create a `Color` from RGB values between 0.0 and 1.0. Values outside this range will be
    /// clamped.
    #[inline]
    pub fn from_rgb_float(r: Scalar, g: Scalar, b: Scalar) -> Color {
        Color {
            r: gamut(r),
            g: gamut(g),
            b: gamut(b),
        }
    }

    /// Create a `Color` from a hue in degrees, and saturation and lightness values between 0.0
    /// and 1.0.
    #[inline]
    pub fn from_hsl(hue: Scalar, saturation: Scalar, lightness: Scalar) -> Color {
        Self::from(&Hsl::new(hue, saturation, lightness))
    }

    #[inline]
    pub fn from_hsv(hue: Scalar, saturation: Scalar, value: Scalar) -> Color {
        Self::from(&Hsv::new(hue, saturation, value))
    }

    /// Create a `Color` from XYZ coordinates in the CIE 1931 color space. This function will
    /// tend to create fully saturated colors at the edge of the sRGB gamut if the coordinates
    /// lie outside the sRGB range.
    ///
    /// See:
    /// - <https://en.wikipedia.org/wiki/CIE_1931_color_space>
    /// - <https://en.wikipedia.org/wiki/SRGB>
    #[inline]
    pub fn from_xyz(x: Scalar, y: Scalar, z: Scalar) -> Color {
        Self::from(&Xyz::new(x, y, z))
    }

    /// Create a `Color` from L, a and b coordinates in the CIE Lab color space. See
    /// documentation for `from_xyz`; the same restrictions apply here.
    ///
    /// See: <https://en.wikipedia.org/wiki/Lab_color_space>
    #[inline]
    pub fn from_lab(l: Scalar, a: Scalar, b: Scalar) -> Color {
        Self::from(&Lab::new(l, a, b))
    }

    /// Create a `Color` from L, u and v coordinates in the CIE Luv color space.
    #[inline]
    pub fn from_luv(l: Scalar, u: Scalar, v: Scalar) -> Color {
        Self::from(&Luv::new(l, u, v))
    }

    /// Get the red, green and blue values, all between 0.0 and 1.0.
    #[inline]
    pub fn to_rgb_float(&self) -> Rgb {
        Rgb::from(self)
    }

    /// Format the color as a RGB-representation string (`#fc0070`).
    #[inline]
    pub fn to_rgb_hex_string(&self, leading_hash: bool) -> String {
        Rgb::from(self).to_hex_string(leading_hash)
    }

    /// Convert a `Color` to its hue, saturation and lightness values. The hue is given in
    /// degrees, as a number between 0.0 and 360.0. Saturation and lightness are numbers between
    /// 0.0 and 1.0.
    #[inline]
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from(self)
    }

    /// Convert a `Color` to its hue, saturation and value. The hue is given in degrees, as a
    /// number between 0.0 and 360.0. Saturation and value are numbers between 0.0 and 1.0.
    #[inline]
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from(self)
    }

    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from(self)
    }

    /// Get L, a and b coordinates according to the Lab color space.
    ///
    /// See: <https://en.wikipedia.org/wiki/Lab_color_space>
    #[inline]
    pub fn to_lab(&self) -> Lab {
        Lab::from(self)
    }

    /// Get L, u and v coordinates according to the Luv color space.
    ///
    /// See: <https://en.wikipedia.org/wiki/CIELUV>
    #[inline]
    pub fn to_luv(&self) -> Luv {
        Luv::from(self)
    }

    /// Format the color in the given space, as used by the command-line front end.
    pub fn to_space_string(&self, space: Space, format: Format) -> Option<String> {
        match space {
            Space::Rgb => Some(self.to_rgb_float().to_color_string(format)),
            Space::Hsv => Some(self.to_hsv().to_color_string(format)),
            Space::Hsl => Some(self.to_hsl().to_color_string(format)),
            Space::Lab => Some(self.to_lab().to_color_string(format)),
            Space::Luv | Space::Hcl => Some(self.to_luv().to_color_string(format)),
            Space::None | Space::Cymk | Space::Unrecognized(_) => None,
        }
    }

    /// Pure black.
    pub fn black() -> Color {
        Color::from_rgb(0, 0, 0)
    }

    /// Pure white.
    pub fn white() -> Color {
        Color::from_rgb(255, 255, 255)
    }

    /// Red (`#ff0000`)
    pub fn red() -> Color {
        Color::from_rgb(255, 0, 0)
    }

    /// Lime (`#00ff00`)
    pub fn lime() -> Color {
        Color::from_rgb(0, 255, 0)
    }

    /// Blue (`#0000ff`)
    pub fn blue() -> Color {
        Color::from_rgb(0, 0, 255)
    }

    /// Create a gray tone from a lightness value (0.0 is black, 1.0 is white).
    pub fn graytone(lightness: Scalar) -> Color {
        Color::from_hsl(0.0, 0.0, lightness)
    }

    /// Interpolate between this color and `other` (see [`interpolate()`]).
    pub fn interpolate(&self, other: &Color, options: Options) -> Result<Color> {
        interpolate::interpolate(self, other, options)
    }

    /// Mix this color with `other` in the given space. A `ratio` of `0.0` yields this color,
    /// `1.0` yields `other`.
    pub fn mix(&self, other: &Color, space: Space, ratio: Scalar) -> Result<Color> {
        self.interpolate(other, Options::new().in_space(space).with_ratio(ratio))
    }
}

// by default Colors will be printed as hex codes
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rgb_hex_string(true))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color::from_{}",
            self.to_rgb_float().to_color_string(Format::NoSpaces)
        )
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        self.to_rgb_float().to_u8() == other.to_rgb_float().to_u8()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Spaces,
    NoSpaces,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_partial_eq() {
        assert_eq!(
            Color::from_hsl(120.0, 0.3, 0.5),
            Color::from_hsl(360.0 + 120.0, 0.3, 0.5),
        );
        assert_eq!(Color::from_rgb(1, 2, 3), Color::from_rgb(1, 2, 3));
        assert_eq!(Color::black(), Color::from_hsl(123.0, 0.3, 0.0));
        assert_eq!(Color::white(), Color::from_hsl(123.0, 0.3, 1.0));

        assert_ne!(
            Color::from_hsl(120.0, 0.3, 0.5),
            Color::from_hsl(122.0, 0.3, 0.5),
        );
        assert_ne!(Color::from_rgb(1, 2, 3), Color::from_rgb(2, 2, 3));
        assert_ne!(Color::from_rgb(1, 2, 3), Color::from_rgb(1, 3, 3));
        assert_ne!(Color::from_rgb(1, 2, 3), Color::from_rgb(1, 2, 4));
    }

    #[test]
    fn out_of_gamut_components_are_clamped() {
        let c = Color::from_rgb_float(1.4, -0.2, Scalar::NAN).to_rgb_float();
        assert_eq!(Rgb::new(1.0, 0.0, 0.0), c);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!("#ff8000", Color::from_rgb(255, 128, 0).to_string());
        assert_eq!("Color::from_rgb(1,0,0)", format!("{:?}", Color::red()));
    }

    #[test]
    fn to_space_string() {
        let red = Color::red();
        assert_eq!(
            Some("hsl(0, 100.0%, 50.0%)".to_string()),
            red.to_space_string(Space::Hsl, Format::Spaces)
        );
        assert_eq!(
            Some("hsv(0,100.0%,100.0%)".to_string()),
            red.to_space_string(Space::Hsv, Format::NoSpaces)
        );
        assert_eq!(
            Some("Lab(53.24, 80.09, 67.2)".to_string()),
            red.to_space_string(Space::Lab, Format::Spaces)
        );
        assert_eq!(None, red.to_space_string(Space::Cymk, Format::Spaces));
    }

    #[test]
    fn mix_in_rgb_and_hsl() {
        let purple = Color::red().mix(&Color::blue(), Space::Rgb, 0.5);
        assert_eq!(Ok(Color::from_rgb_float(0.5, 0.0, 0.5)), purple);

        // red (0°) to blue (240°) is more than half a turn ahead: through magenta
        let magenta = Color::red().mix(&Color::blue(), Space::Hsl, 0.5);
        assert_eq!(Ok(Color::from_rgb(255, 0, 255)), magenta);

        // blue to red goes the direct way, through green
        let green = Color::blue().mix(&Color::red(), Space::Hsl, 0.5);
        assert_eq!(Ok(Color::from_rgb(0, 255, 0)), green);
    }

    #[test]
    fn mix_defaults_to_luv() {
        let (c1, c2) = (Color::from_rgb(255, 127, 14), Color::from_rgb(50, 100, 200));
        assert_eq!(
            c1.mix(&c2, Space::Luv, 0.5),
            c1.interpolate(&c2, Options::new())
        );
        assert_eq!(
            Err(Error::UnsupportedSpace(Space::Cymk)),
            c1.mix(&c2, Space::Cymk, 0.5)
        );
    }
}
