//! Scalar helpers shared by every pixel type.
//!
//! - [`EPSILON`] / [`approx_eq`] - the absolute tolerance used for equality
//!   and degenerate-case detection
//! - [`quantize`] / [`dequantize`] - 8-bit projection of [0, 1] channels
//! - [`quantize_hue`] / [`dequantize_hue`] - 8-bit projection of hue degrees
//! - [`wrap_hue`] - fold any angle into [0, 360)

/// Absolute tolerance for channel comparisons.
pub const EPSILON: f64 = 1e-6;

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Projects a normalized channel to 8 bits: `round(255 * x)`.
///
/// Rounds half away from zero. Out-of-range inputs are not clamped.
#[inline]
pub fn quantize(x: f64) -> i32 {
    (255.0 * x).round() as i32
}

/// Projects a hue in degrees to 8 bits: `round(h * 255 / 360)`.
#[inline]
pub fn quantize_hue(h: f64) -> i32 {
    (h * 255.0 / 360.0).round() as i32
}

/// Maps an 8-bit value to a normalized channel.
#[inline]
pub fn dequantize(v: i32) -> f64 {
    v as f64 / 255.0
}

/// Maps an 8-bit value to a hue in degrees.
#[inline]
pub fn dequantize_hue(v: i32) -> f64 {
    v as f64 / 255.0 * 360.0
}

/// Wraps a hue into `[0, 360)`.
///
/// Tiny negative inputs can make the Euclidean remainder round up to exactly
/// 360, which is folded back to 0.
///
/// ```
/// use tint_core::math::wrap_hue;
///
/// assert_eq!(wrap_hue(-30.0), 330.0);
/// assert_eq!(wrap_hue(360.0), 0.0);
/// assert_eq!(wrap_hue(725.0), 5.0);
/// ```
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_approx_eq_tolerance() {
        assert!(approx_eq(0.5, 0.5 + 5e-7));
        assert!(!approx_eq(0.5, 0.5 + 2e-6));
    }

    #[test]
    fn test_quantize_rounds_half_away_from_zero() {
        assert_eq!(quantize(0.5), 128);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(-1.0), -255);
    }

    #[test]
    fn test_byte_roundtrip() {
        for v in 0..=255 {
            assert_eq!(quantize(dequantize(v)), v);
            assert_eq!(quantize_hue(dequantize_hue(v)), v);
        }
    }

    #[test]
    fn test_dequantize_hue_range() {
        assert_abs_diff_eq!(dequantize_hue(255), 360.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dequantize_hue(0), 0.0);
    }

    #[test]
    fn test_wrap_hue() {
        assert_abs_diff_eq!(wrap_hue(-90.0), 270.0);
        assert_abs_diff_eq!(wrap_hue(359.5), 359.5);
        assert_eq!(wrap_hue(-1e-20), 0.0);
        assert!(wrap_hue(-1e-20) < 360.0);
    }
}
