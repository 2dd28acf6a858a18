//! # tint-color
//!
//! Color space conversion and alpha blending for `tint-core` pixels.
//!
//! - **Conversion** - RGB ↔ HSL, RGB ↔ HSV, channel projection to grayscale,
//!   and a round trip through RGB for every other pair
//! - **Blending** - linear alpha compositing snapped to 8-bit precision
//! - **Batch** - slice-level helpers, parallel with the `parallel` feature
//!
//! # Architecture
//!
//! ```text
//!                 tint-color
//!                     |
//!     +---------------+---------------+
//!     |               |               |
//!  convert          blend           batch
//!     |               |               |
//!     +-------+-------+---------------+
//!             |
//!         tint-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tint_color::prelude::*;
//!
//! let red: Rgb = construct_pixel(255, 0, 0);
//! let hsl: Hsl = red.convert_to();
//! assert!(hsl.hue.abs() < 1e-9);
//! assert_eq!(hsl.saturation, 1.0);
//! assert_eq!(hsl.lightness, 0.5);
//!
//! let back: Rgb = hsl.convert_to();
//! assert_eq!(back.raw(), (255, 0, 0));
//!
//! let mid = alpha_blending(&Gray::new(0), &Gray::new(255), 0.5);
//! assert_eq!(mid.scale, 128);
//! ```
//!
//! # Runtime Dispatch
//!
//! [`convert`] works on [`AnyPixel`](tint_core::AnyPixel) and covers every
//! ordered pair of color spaces. See [`conversion_path`] for which pairs use a
//! direct formula and which round-trip through RGB.
//!
//! # Feature Flags
//!
//! - `parallel` (default) - use `rayon` in [`batch`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod batch;
pub mod blend;
pub mod convert;

pub use blend::{alpha_blending, blend_any, blend_byte, AlphaBlend};
pub use convert::{convert, conversion_path, to_gray, ConversionPath, ConvertTo};
pub use error::{ColorError, ColorResult};

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        alpha_blending, blend_any, convert, to_gray, AlphaBlend, ColorError, ColorResult,
        ConvertTo,
    };

    pub use tint_core::prelude::*;
}
