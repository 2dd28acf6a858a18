//! Error types for conversion and blending.
//!
//! The numeric paths never fail. Errors only come from runtime-tagged inputs
//! that cannot be combined.

use thiserror::Error;
use tint_core::ColorSpace;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Blend operands live in different color spaces.
    #[error("cannot blend {front} onto {back}: color spaces differ")]
    SpaceMismatch {
        /// Space of the background pixel.
        back: ColorSpace,
        /// Space of the foreground pixel.
        front: ColorSpace,
    },

    /// Batch operands have different lengths.
    #[error("length mismatch: {back} background pixels vs {front} foreground pixels")]
    LengthMismatch {
        /// Number of background pixels.
        back: usize,
        /// Number of foreground pixels.
        front: usize,
    },

    /// Error from `tint-core` (parsing spaces or masks).
    #[error(transparent)]
    Core(#[from] tint_core::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
