//! Color-space-aware interpolation between two colors.

use std::{fmt, str::FromStr};

use tracing::{debug, warn};

use crate::{
    colorspace::ColorModel,
    error::{Error, Result},
    mix::Mix,
    types::Scalar,
};

/// The color space in which two colors are blended.
///
/// `Hcl` is an alias of `Luv`. `Cymk` is reserved and rejected by
/// [`interpolate`]. `Unrecognized` carries a raw tag value from outside the
/// known set (see the `From<i64>` conversion); it blends like `Luv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Space {
    #[default]
    None,
    Rgb,
    Cymk,
    Hsv,
    Hsl,
    Luv,
    Hcl,
    Lab,
    Unrecognized(i64),
}

impl From<i64> for Space {
    fn from(raw: i64) -> Self {
        match raw {
            0 => Space::None,
            1 => Space::Rgb,
            2 => Space::Cymk,
            3 => Space::Hsv,
            4 => Space::Hsl,
            5 => Space::Luv,
            6 => Space::Hcl,
            7 => Space::Lab,
            _ => Space::Unrecognized(raw),
        }
    }
}

impl FromStr for Space {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_ref() {
            "none" => Ok(Space::None),
            "rgb" => Ok(Space::Rgb),
            "cymk" | "cmyk" => Ok(Space::Cymk),
            "hsv" => Ok(Space::Hsv),
            "hsl" => Ok(Space::Hsl),
            "luv" => Ok(Space::Luv),
            "hcl" => Ok(Space::Hcl),
            "lab" => Ok(Space::Lab),
            _ => Err(Error::UnknownSpace(s.to_owned())),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::None => write!(f, "default"),
            Space::Rgb => write!(f, "RGB"),
            Space::Cymk => write!(f, "CYMK"),
            Space::Hsv => write!(f, "HSV"),
            Space::Hsl => write!(f, "HSL"),
            Space::Luv => write!(f, "Luv"),
            Space::Hcl => write!(f, "HCL"),
            Space::Lab => write!(f, "Lab"),
            Space::Unrecognized(raw) => write!(f, "unrecognized ({raw})"),
        }
    }
}

/// A single loosely-typed interpolation argument, as accepted by
/// [`Options::from_args`] and the [`interpolate!`](crate::interpolate!) macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg {
    Ratio(Scalar),
    Space(Space),
}

impl From<Scalar> for Arg {
    fn from(ratio: Scalar) -> Self {
        Arg::Ratio(ratio)
    }
}

impl From<Space> for Arg {
    fn from(space: Space) -> Self {
        Arg::Space(space)
    }
}

/// How to interpolate: the mixing ratio and the space to blend in. Both are
/// optional and default independently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Options {
    pub ratio: Option<Scalar>,
    pub space: Option<Space>,
}

impl Options {
    pub const DEFAULT_RATIO: Scalar = 0.5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Position between the two colors: `0.0` is the first, `1.0` the second.
    /// Values outside [0, 1] are not clamped.
    pub fn with_ratio(mut self, ratio: Scalar) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn in_space(mut self, space: Space) -> Self {
        self.space = Some(space);
        self
    }

    /// Collect options from arguments given in any order. When a ratio or a
    /// space is given more than once, the last one wins.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        args.into_iter()
            .fold(Self::new(), |options, arg| match arg.into() {
                Arg::Ratio(ratio) => options.with_ratio(ratio),
                Arg::Space(space) => options.in_space(space),
            })
    }

    pub fn resolved_ratio(&self) -> Scalar {
        self.ratio.unwrap_or(Self::DEFAULT_RATIO)
    }

    pub fn resolved_space(&self) -> Space {
        self.space.unwrap_or_default()
    }
}

fn blend<C, S: Mix>(
    first: &C,
    second: &C,
    ratio: Scalar,
    to_space: impl Fn(&C) -> S,
    from_space: impl Fn(S) -> C,
) -> C {
    from_space(to_space(first).mix(&to_space(second), ratio))
}

fn blend_luv<C: ColorModel>(first: &C, second: &C, ratio: Scalar) -> C {
    blend(first, second, ratio, C::to_luv, C::from_luv)
}

/// Interpolate between two colors.
///
/// Both colors are converted into the selected space, blended there and
/// converted back. RGB, Luv and Lab components are interpolated linearly. HSV
/// and HSL blend the hue along the circle (see [`hue_blend`](crate::mix::hue_blend))
/// and clamp the other two components to [0, 1].
///
/// Without a space the blend happens in Luv; without a ratio it is `0.5`.
/// Selecting [`Space::Cymk`] yields [`Error::UnsupportedSpace`].
pub fn interpolate<C: ColorModel>(first: &C, second: &C, options: Options) -> Result<C> {
    let ratio = options.resolved_ratio();
    let space = options.resolved_space();
    debug!(%space, ratio, "interpolating colors");

    match space {
        Space::Rgb => Ok(blend(first, second, ratio, C::to_rgb, C::from_rgb)),
        Space::Cymk => Err(Error::UnsupportedSpace(space)),
        Space::Hsv => Ok(blend(first, second, ratio, C::to_hsv, C::from_hsv)),
        Space::Hsl => Ok(blend(first, second, ratio, C::to_hsl, C::from_hsl)),
        Space::Lab => Ok(blend(first, second, ratio, C::to_lab, C::from_lab)),
        Space::Luv | Space::Hcl => Ok(blend_luv(first, second, ratio)),
        Space::None => Ok(blend_luv(first, second, ratio)),
        Space::Unrecognized(raw) => {
            warn!(raw, "unrecognized interpolation space, blending in Luv");
            Ok(blend_luv(first, second, ratio))
        }
    }
}

/// Interpolate with loosely-typed trailing arguments, each either a ratio
/// (`f64`) or a [`Space`], in any order:
///
/// ```
/// use tincture::{interpolate, Color, Space};
///
/// let mixed = interpolate!(&Color::red(), &Color::blue(), 0.75, Space::Hsv).unwrap();
/// let default = interpolate!(&Color::red(), &Color::blue()).unwrap();
/// # let _ = (mixed, default);
/// ```
#[macro_export]
macro_rules! interpolate {
    ($first:expr, $second:expr $(, $arg:expr)* $(,)?) => {{
        let args: &[$crate::Arg] = &[$($crate::Arg::from($arg)),*];
        $crate::interpolate($first, $second, $crate::Options::from_args(args.iter().copied()))
    }};
}
