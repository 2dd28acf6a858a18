//! Slice-level conversion and blending.
//!
//! Thin wrappers that apply [`convert`] and [`blend_any`] element-wise. With
//! the `parallel` feature (default) the work is spread over the `rayon`
//! thread pool; results are identical either way.
//!
//! # Example
//!
//! ```rust
//! use tint_color::batch::{blend_slices, convert_slice};
//! use tint_core::{AnyPixel, ColorSpace, Gray, Mask};
//!
//! let row: Vec<AnyPixel> = (0..4).map(|v| AnyPixel::None(Gray::new(v * 60))).collect();
//! let rgb = convert_slice(&row, ColorSpace::Rgb, Mask::All);
//! assert!(rgb.iter().all(|p| p.space() == ColorSpace::Rgb));
//!
//! let blended = blend_slices(&row, &row, 0.5).unwrap();
//! assert_eq!(blended, row);
//! ```

use crate::blend::blend_any;
use crate::convert::convert;
use crate::error::{ColorError, ColorResult};
use tint_core::{AnyPixel, ColorSpace, Mask};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Converts every pixel of `pixels` into `to`.
pub fn convert_slice(pixels: &[AnyPixel], to: ColorSpace, mask: Mask) -> Vec<AnyPixel> {
    debug!(count = pixels.len(), %to, "convert_slice");

    #[cfg(feature = "parallel")]
    let iter = pixels.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = pixels.iter();

    iter.map(|&p| convert(p, to, mask)).collect()
}

/// Blends `front[i]` onto `back[i]` for every index.
///
/// # Errors
///
/// - [`ColorError::LengthMismatch`] if the slices differ in length
/// - [`ColorError::SpaceMismatch`] for the first pair in different spaces
pub fn blend_slices(
    back: &[AnyPixel],
    front: &[AnyPixel],
    alpha: f64,
) -> ColorResult<Vec<AnyPixel>> {
    if back.len() != front.len() {
        return Err(ColorError::LengthMismatch {
            back: back.len(),
            front: front.len(),
        });
    }
    debug!(count = back.len(), alpha, "blend_slices");

    #[cfg(feature = "parallel")]
    let iter = back.par_iter().zip(front.par_iter());
    #[cfg(not(feature = "parallel"))]
    let iter = back.iter().zip(front.iter());

    iter.map(|(b, f)| blend_any(b, f, alpha)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::{Gray, Rgb, RawPixel};

    fn ramp(n: i32) -> Vec<AnyPixel> {
        (0..n)
            .map(|i| AnyPixel::Rgb(Rgb::from_raw(i % 256, (i * 7) % 256, 255 - i % 256)))
            .collect()
    }

    #[test]
    fn test_convert_slice_matches_scalar() {
        let pixels = ramp(1000);
        let hsl = convert_slice(&pixels, ColorSpace::Hsl, Mask::All);
        assert_eq!(hsl.len(), pixels.len());
        for (src, out) in pixels.iter().zip(&hsl) {
            assert_eq!(*out, convert(*src, ColorSpace::Hsl, Mask::All));
        }
    }

    #[test]
    fn test_blend_slices_length_mismatch() {
        let err = blend_slices(&ramp(3), &ramp(2), 0.5).unwrap_err();
        assert_eq!(err, ColorError::LengthMismatch { back: 3, front: 2 });
    }

    #[test]
    fn test_blend_slices_space_mismatch() {
        let back = vec![AnyPixel::None(Gray::new(1)); 2];
        let err = blend_slices(&back, &ramp(2), 0.5).unwrap_err();
        assert!(matches!(err, ColorError::SpaceMismatch { .. }));
    }

    #[test]
    fn test_blend_slices_boundaries() {
        let back = ramp(300);
        let front = convert_slice(&ramp(300), ColorSpace::Rgb, Mask::All)
            .into_iter()
            .rev()
            .collect::<Vec<_>>();
        assert_eq!(blend_slices(&back, &front, 0.0).unwrap(), back);
        assert_eq!(blend_slices(&back, &front, 1.0).unwrap(), front);
    }
}
