//! Blending primitives. Everything here works on plain numbers and space
//! tuples; nothing knows how a color is stored.

use crate::{helper::clamp, types::Scalar, Hsl, Hsv, Lab, Luv, Rgb};

/// Undefined components take part in a blend as `0.0`.
#[inline]
fn neutralize(x: Scalar) -> Scalar {
    if x.is_nan() {
        0.0
    } else {
        x
    }
}

/// Linear interpolation between `x1` (at `v = 0`) and `x2` (at `v = 1`).
/// `v` is not clamped, so values outside [0, 1] extrapolate.
#[inline]
pub fn lerp(x1: Scalar, x2: Scalar, v: Scalar) -> Scalar {
    (1.0 - v) * neutralize(x1) + v * neutralize(x2)
}

/// Blend two `(hue, saturation, value-or-lightness)` triples.
///
/// When the second hue is more than half a turn ahead of the first, the first
/// hue is lifted by a full turn and the result is reduced modulo 360, so the
/// blend goes the short way across 0°. Otherwise the hues are interpolated
/// directly and left unreduced; a second hue far *behind* the first therefore
/// takes the long way round and may leave [0, 360).
///
/// The other two components are interpolated and clamped to [0, 1].
pub fn hue_blend(first: [Scalar; 3], second: [Scalar; 3], v: Scalar) -> [Scalar; 3] {
    let [h1, s1, o1] = first;
    let [h2, s2, o2] = second;
    let (h1, h2) = (neutralize(h1), neutralize(h2));

    let h = if h2 - h1 > 180.0 {
        ((1.0 - v) * (h1 + 360.0) + v * h2) % 360.0
    } else {
        h1 + v * (h2 - h1)
    };

    [
        h,
        clamp(0.0, 1.0, lerp(s1, s2, v)),
        clamp(0.0, 1.0, lerp(o1, o2, v)),
    ]
}

/// A space tuple that can be blended with another tuple of the same space.
pub trait Mix {
    fn mix(&self, other: &Self, v: Scalar) -> Self;
}

impl Mix for Rgb {
    fn mix(&self, other: &Self, v: Scalar) -> Self {
        Rgb {
            r: lerp(self.r, other.r, v),
            g: lerp(self.g, other.g, v),
            b: lerp(self.b, other.b, v),
        }
    }
}

impl Mix for Luv {
    fn mix(&self, other: &Self, v: Scalar) -> Self {
        Luv {
            l: lerp(self.l, other.l, v),
            u: lerp(self.u, other.u, v),
            v: lerp(self.v, other.v, v),
        }
    }
}

impl Mix for Lab {
    fn mix(&self, other: &Self, v: Scalar) -> Self {
        Lab {
            l: lerp(self.l, other.l, v),
            a: lerp(self.a, other.a, v),
            b: lerp(self.b, other.b, v),
        }
    }
}

impl Mix for Hsv {
    fn mix(&self, other: &Self, v: Scalar) -> Self {
        let [h, s, value] = hue_blend([self.h, self.s, self.v], [other.h, other.s, other.v], v);
        Hsv { h, s, v: value }
    }
}

impl Mix for Hsl {
    fn mix(&self, other: &Self, v: Scalar) -> Self {
        let [h, s, l] = hue_blend([self.h, self.s, self.l], [other.h, other.s, other.l], v);
        Hsl { h, s, l }
    }
}
