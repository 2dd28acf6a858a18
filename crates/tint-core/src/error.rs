//! Error types for tint-core.
//!
//! Pixel construction and projection never fail: out-of-range inputs simply
//! produce out-of-range channels. Errors only arise when parsing or looking up
//! the metadata that selects spaces and channels at runtime.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{ColorSpace, Error};
//!
//! let err = "cmyk".parse::<ColorSpace>().unwrap_err();
//! assert!(matches!(err, Error::UnknownColorSpace(_)));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving color spaces and channel masks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text does not name a supported color space.
    #[error("unknown color space: '{0}'")]
    UnknownColorSpace(String),

    /// The text does not name a channel mask.
    #[error("unknown channel mask: '{0}'")]
    UnknownMask(String),

    /// Channel index outside `0..=2`.
    #[error("channel index {0} out of range (expected 0, 1 or 2)")]
    InvalidChannel(usize),
}

impl Error {
    /// Creates an [`Error::UnknownColorSpace`] error.
    #[inline]
    pub fn unknown_color_space(name: impl Into<String>) -> Self {
        Self::UnknownColorSpace(name.into())
    }

    /// Creates an [`Error::UnknownMask`] error.
    #[inline]
    pub fn unknown_mask(name: impl Into<String>) -> Self {
        Self::UnknownMask(name.into())
    }

    /// Returns `true` if this error came from parsing text.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::UnknownColorSpace(_) | Self::UnknownMask(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_color_space_message() {
        let err = Error::unknown_color_space("cmyk");
        assert!(err.to_string().contains("cmyk"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_invalid_channel_message() {
        let err = Error::InvalidChannel(7);
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(!err.is_parse_error());
    }
}
