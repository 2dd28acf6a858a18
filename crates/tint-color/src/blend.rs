//! Linear alpha compositing of two pixels in the same color space.
//!
//! `alpha` weights the foreground: `back * (1 - alpha) + front * alpha`.
//!
//! - [`Gray`] and [`Rgb`] interpolate directly on 8-bit values and round the
//!   result, clamped to `0..=255`. RGB therefore always snaps to 8-bit steps.
//! - [`Hsl`] and [`Hsv`] convert both operands to RGB, blend there and
//!   convert back.
//!
//! `alpha` is not validated. Values outside [0, 1] extrapolate and then
//! saturate at the clamp.
//!
//! # Example
//!
//! ```rust
//! use tint_color::blend::{alpha_blending, blend_byte};
//! use tint_core::{Rgb, RawPixel};
//!
//! assert_eq!(blend_byte(0, 255, 0.5), 128);
//!
//! let back = Rgb::from_raw(0, 100, 200);
//! let front = Rgb::WHITE;
//! assert_eq!(alpha_blending(&back, &front, 1.0), front);
//! assert_eq!(alpha_blending(&back, &front, 0.0), back);
//! ```

use crate::convert::ConvertTo;
use crate::error::{ColorError, ColorResult};
use tint_core::math::dequantize;
use tint_core::{AnyPixel, Gray, Hsl, Hsv, Rgb};
use tracing::trace;

/// Alpha compositing of `front` over `self`.
pub trait AlphaBlend: Sized {
    /// Blends `front` onto `self` with weight `alpha` on `front`.
    fn alpha_blend(&self, front: &Self, alpha: f64) -> Self;
}

/// Blends `front` onto `back`.
#[inline]
pub fn alpha_blending<P: AlphaBlend>(back: &P, front: &P, alpha: f64) -> P {
    back.alpha_blend(front, alpha)
}

/// `round(back * (1 - alpha) + front * alpha)` clamped to `0..=255`.
#[inline]
pub fn blend_byte(back: u8, front: u8, alpha: f64) -> u8 {
    blend_scaled(back as f64, front as f64, alpha) as u8
}

/// Interpolates two values already on the 0..=255 scale.
#[inline]
fn blend_scaled(back: f64, front: f64, alpha: f64) -> i32 {
    let value = (back * (1.0 - alpha) + front * alpha).round() as i32;
    value.clamp(0, 255)
}

/// Blends one normalized RGB channel at 8-bit precision.
#[inline]
fn blend_channel(back: f64, front: f64, alpha: f64) -> f64 {
    let back = (back * 255.0).round();
    let front = (front * 255.0).round();
    dequantize(blend_scaled(back, front, alpha))
}

impl AlphaBlend for Gray {
    #[inline]
    fn alpha_blend(&self, front: &Self, alpha: f64) -> Self {
        Gray::new(blend_byte(self.scale, front.scale, alpha))
    }
}

impl AlphaBlend for Rgb {
    #[inline]
    fn alpha_blend(&self, front: &Self, alpha: f64) -> Self {
        Rgb::new(
            blend_channel(self.red, front.red, alpha),
            blend_channel(self.green, front.green, alpha),
            blend_channel(self.blue, front.blue, alpha),
        )
    }
}

macro_rules! blend_via_rgb {
    ($($t:ty),* $(,)?) => {$(
        impl AlphaBlend for $t {
            fn alpha_blend(&self, front: &Self, alpha: f64) -> Self {
                let back: Rgb = self.convert_to();
                let front: Rgb = front.convert_to();
                back.alpha_blend(&front, alpha).convert_to()
            }
        }
    )*};
}

blend_via_rgb!(Hsl, Hsv);

/// Blends two runtime-tagged pixels.
///
/// # Errors
///
/// [`ColorError::SpaceMismatch`] if the operands are in different spaces.
pub fn blend_any(back: &AnyPixel, front: &AnyPixel, alpha: f64) -> ColorResult<AnyPixel> {
    trace!(space = %back.space(), alpha, "blend");
    match (back, front) {
        (AnyPixel::None(b), AnyPixel::None(f)) => Ok(AnyPixel::None(b.alpha_blend(f, alpha))),
        (AnyPixel::Rgb(b), AnyPixel::Rgb(f)) => Ok(AnyPixel::Rgb(b.alpha_blend(f, alpha))),
        (AnyPixel::Hsl(b), AnyPixel::Hsl(f)) => Ok(AnyPixel::Hsl(b.alpha_blend(f, alpha))),
        (AnyPixel::Hsv(b), AnyPixel::Hsv(f)) => Ok(AnyPixel::Hsv(b.alpha_blend(f, alpha))),
        _ => Err(ColorError::SpaceMismatch {
            back: back.space(),
            front: front.space(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tint_core::{ColorSpace, RawPixel};

    #[test]
    fn test_gray_midpoint() {
        let mid = alpha_blending(&Gray::new(0), &Gray::new(255), 0.5);
        assert_eq!(mid.scale, 128);
    }

    #[test]
    fn test_gray_boundaries() {
        for (b, f) in [(0u8, 255u8), (17, 200), (255, 0), (99, 99)] {
            let back = Gray::new(b);
            let front = Gray::new(f);
            assert_eq!(back.alpha_blend(&front, 0.0), back);
            assert_eq!(back.alpha_blend(&front, 1.0), front);
        }
    }

    #[test]
    fn test_alpha_out_of_range_saturates() {
        assert_eq!(blend_byte(100, 200, 2.0), 255);
        assert_eq!(blend_byte(100, 200, -2.0), 0);
        assert_eq!(blend_byte(200, 100, 1.5), 50);
    }

    #[test]
    fn test_rgb_boundaries() {
        let back = Rgb::from_raw(3, 140, 251);
        let front = Rgb::from_raw(250, 7, 0);
        assert_eq!(alpha_blending(&back, &front, 0.0), back);
        assert_eq!(alpha_blending(&back, &front, 1.0), front);
    }

    #[test]
    fn test_rgb_snaps_to_8bit() {
        let back = Rgb::new(0.1234, 0.5, 0.0);
        let out = back.alpha_blend(&back, 0.0);
        assert_eq!(out.raw(), (31, 128, 0));
        assert_abs_diff_eq!(out.red, 31.0 / 255.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rgb_midpoint() {
        let out = alpha_blending(&Rgb::BLACK, &Rgb::WHITE, 0.25);
        assert_eq!(out.raw(), (64, 64, 64));
    }

    #[test]
    fn test_hsl_blends_through_rgb() {
        let back: Hsl = Rgb::from_raw(255, 0, 0).convert_to();
        let front: Hsl = Rgb::from_raw(0, 0, 255).convert_to();
        let out: Rgb = alpha_blending(&back, &front, 0.5).convert_to();
        assert_eq!(out.raw(), (128, 0, 128));
    }

    #[test]
    fn test_hsv_boundaries() {
        let back: Hsv = Rgb::from_raw(10, 200, 30).convert_to();
        let front: Hsv = Rgb::from_raw(90, 0, 250).convert_to();
        let out: Rgb = back.alpha_blend(&front, 1.0).convert_to();
        assert_eq!(out.raw(), (90, 0, 250));
    }

    #[test]
    fn test_blend_any() {
        let back = AnyPixel::None(Gray::new(0));
        let front = AnyPixel::None(Gray::new(255));
        assert_eq!(blend_any(&back, &front, 0.5).unwrap(), AnyPixel::None(Gray::new(128)));

        let rgb = AnyPixel::construct(ColorSpace::Rgb, 1, 2, 3);
        let err = blend_any(&back, &rgb, 0.5).unwrap_err();
        assert_eq!(
            err,
            ColorError::SpaceMismatch {
                back: ColorSpace::None,
                front: ColorSpace::Rgb,
            }
        );
    }
}
