//! Conversion functions between sRGB, CIE XYZ, CIE Lab and CIE Luv. The
//! matrices and transfer functions follow the sample code in the W3C CSS
//! Color 4 draft; Lab and Luv are computed relative to the D65 white point.

use crate::{
    matrix::mat3_dot,
    types::{Mat3, Scalar, Vec3},
};

/// D65 reference white, defined by 4-figure CIE x,y chromaticities. The rows
/// of the sRGB-to-XYZ matrix sum to these values, so sRGB white maps to
/// `a = b = u = v = 0`.
pub const D65: Vec3 = [0.3127 / 0.3290, 1.00000, (1.0 - 0.3127 - 0.3290) / 0.3290];

const LAB_EPSILON: Scalar = 216. / 24389.; // 6^3/29^3
const LAB_KAPPA: Scalar = 24389. / 27.; // 29^3/3^3

// sRGB-related functions

/// Converts an array of sRGB values where in-gamut values are in the range
/// [0 - 1] to linear light (un-companded) form.
/// (https://en.wikipedia.org/wiki/SRGB)
///
/// Extended transfer function:
/// For negative values, linear portion is extended on reflection of axis,
/// then reflected power function is used.
pub fn lin_srgb(rgb: Vec3) -> Vec3 {
    let finv = |val: Scalar| {
        let abs = val.abs();

        if abs < 0.04045 {
            val / 12.92
        } else {
            val.signum() * Scalar::powf((abs + 0.055) / 1.055, 2.4)
        }
    };

    let [r, g, b] = rgb;
    [finv(r), finv(g), finv(b)]
}

/// Converts an array of linear-light sRGB values in the range 0.0-1.0
/// to gamma corrected form.
/// (https://en.wikipedia.org/wiki/SRGB)
///
/// Extended transfer function:
/// For negative values, linear portion is extended on reflection of axis,
/// then reflected power function is used.
pub fn gam_srgb(rgb: Vec3) -> Vec3 {
    let f = |val: Scalar| {
        let abs = val.abs();

        if abs > 0.0031308 {
            val.signum() * (1.055 * Scalar::powf(abs, 1.0 / 2.4) - 0.055)
        } else {
            12.92 * val
        }
    };

    let [r, g, b] = rgb;
    [f(r), f(g), f(b)]
}

/// Converts an array of gamma-encoded sRGB values to D65-adapted XYZ.
#[allow(clippy::excessive_precision)]
pub fn srgb_to_xyz(rgb: Vec3) -> Vec3 {
    #[rustfmt::skip]
    const M: Mat3 = [
        0.41239079926595934, 0.357584339383878,   0.1804807884018343,
        0.21263900587151027, 0.715168678767756,   0.07219231536073371,
        0.01933081871559182, 0.11919477979462598, 0.9505321522496607,
    ];

    mat3_dot(M, lin_srgb(rgb))
}

/// Converts an array of D65-adapted XYZ values to gamma-encoded sRGB.
#[allow(clippy::excessive_precision)]
pub fn xyz_to_srgb(xyz: Vec3) -> Vec3 {
    #[rustfmt::skip]
    const M_: Mat3 = [
         3.2409699419045226,  -1.537383177570094,   -0.4986107602930034,
        -0.9692436362808796,   1.8759675015077202,   0.04155505740717559,
         0.05563007969699366, -0.20397695888897652,  1.0569715142428786,
    ];

    gam_srgb(mat3_dot(M_, xyz))
}

/// Relative luminance to CIE lightness (L*), shared by Lab and Luv.
fn lightness(yr: Scalar) -> Scalar {
    if yr > LAB_EPSILON {
        116. * yr.cbrt() - 16.
    } else {
        LAB_KAPPA * yr
    }
}

/// CIE lightness (L*) back to relative luminance.
fn relative_luminance(l: Scalar) -> Scalar {
    if l > LAB_KAPPA * LAB_EPSILON {
        Scalar::powi((l + 16.) / 116., 3)
    } else {
        l / LAB_KAPPA
    }
}

/// Converts an array of XYZ values to CIE Lab relative to D65.
pub fn xyz_to_lab(xyz: Vec3) -> Vec3 {
    let f = |v: Scalar| {
        if v > LAB_EPSILON {
            v.cbrt()
        } else {
            (LAB_KAPPA * v + 16.) / 116.
        }
    };

    // compute f values from xyz values scaled relative to reference white
    let [x, y, z] = xyz;
    let fx = f(x / D65[0]);
    let fy = f(y / D65[1]);
    let fz = f(z / D65[2]);

    let l = 116. * fy - 16.;
    let a = 500. * (fx - fy);
    let b = 200. * (fy - fz);

    [l, a, b]
}

/// Converts an array of D65-relative Lab channel values to XYZ.
/// (http://www.brucelindbloom.com/index.html?Eqn_Lab_to_XYZ.html)
pub fn lab_to_xyz(lab: Vec3) -> Vec3 {
    let [l, a, b] = lab;
    let fy = (l + 16.) / 116.;
    let fx = (a / 500.) + fy;
    let fz = fy - (b / 200.);

    let xr = if fx.powi(3) > LAB_EPSILON {
        fx.powi(3)
    } else {
        (116. * fx - 16.) / LAB_KAPPA
    };
    let yr = relative_luminance(l);
    let zr = if fz.powi(3) > LAB_EPSILON {
        fz.powi(3)
    } else {
        (116. * fz - 16.) / LAB_KAPPA
    };

    [xr * D65[0], yr * D65[1], zr * D65[2]]
}

/// Chromaticity coordinates (u', v') of an XYZ triple.
fn uv_prime(xyz: Vec3) -> (Scalar, Scalar) {
    let [x, y, z] = xyz;
    let denom = x + 15. * y + 3. * z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4. * x / denom, 9. * y / denom)
    }
}

/// Converts an array of XYZ values to CIE Luv relative to D65.
/// (http://www.brucelindbloom.com/index.html?Eqn_XYZ_to_Luv.html)
pub fn xyz_to_luv(xyz: Vec3) -> Vec3 {
    let (un, vn) = uv_prime(D65);
    let (up, vp) = uv_prime(xyz);

    let l = lightness(xyz[1] / D65[1]);
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    [l, 13. * l * (up - un), 13. * l * (vp - vn)]
}

/// Converts an array of D65-relative Luv values to XYZ.
/// (http://www.brucelindbloom.com/index.html?Eqn_Luv_to_XYZ.html)
pub fn luv_to_xyz(luv: Vec3) -> Vec3 {
    let [l, u, v] = luv;
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let (un, vn) = uv_prime(D65);
    let up = u / (13. * l) + un;
    let vp = v / (13. * l) + vn;

    let y = relative_luminance(l) * D65[1];
    let x = y * 9. * up / (4. * vp);
    let z = y * (12. - 3. * up - 20. * vp) / (4. * vp);

    [x, y, z]
}
