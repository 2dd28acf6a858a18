//! # tint-core
//!
//! Core pixel types for color-space conversion and blending.
//!
//! This crate provides the foundational types used throughout tint:
//!
//! - [`ColorSpace`] - Closed set of supported spaces (grayscale, RGB, HSL, HSV)
//! - [`Gray`], [`Rgb`], [`Hsl`], [`Hsv`] - One pixel type per color space
//! - [`AnyPixel`] - Tagged union over the four pixel types
//! - [`Mask`] - Channel selection for projecting a pixel to grayscale
//! - [`math`] - Tolerance, quantization and hue-wrapping helpers
//!
//! ## Design Philosophy
//!
//! Every pixel knows its color space statically. A [`Hsl`] value cannot be
//! blended against an [`Rgb`] value without an explicit conversion:
//!
//! ```
//! use tint_core::prelude::*;
//!
//! let red: Rgb = construct_pixel(255, 0, 0);
//! assert_eq!(get_raw(&red), (255, 0, 0));
//! assert_eq!(Rgb::WHITE, construct_pixel::<Rgb>(255, 255, 255));
//! ```
//!
//! When the space is only known at runtime, wrap the value in [`AnyPixel`].
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-color (conversions, alpha blending)
//!    +-- tint-tests (integration tests)
//!    +-- tint-bench (benchmarks)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for color spaces, masks and pixels

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;
pub mod mask;
pub mod math;
pub mod pixel;

// Re-exports for convenience
pub use colorspace::ColorSpace;
pub use error::{Error, Result};
pub use mask::Mask;
pub use pixel::{construct_pixel, get_raw, AnyPixel, Gray, Hsl, Hsv, RawPixel, Rgb, SpacePixel};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colorspace::ColorSpace;
    pub use crate::error::{Error, Result};
    pub use crate::mask::Mask;
    pub use crate::math::{approx_eq, wrap_hue, EPSILON};
    pub use crate::pixel::{
        construct_pixel, get_raw, AnyPixel, Gray, Hsl, Hsv, RawPixel, Rgb, SpacePixel,
    };
}
