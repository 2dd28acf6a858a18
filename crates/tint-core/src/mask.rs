//! Channel selection for grayscale projection.
//!
//! Converting a three-channel pixel to [`crate::Gray`] keeps exactly one of
//! its 8-bit projected channels. [`Mask`] names which one. The default,
//! [`Mask::All`], selects the first channel.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Which channel a grayscale projection keeps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mask {
    /// No explicit selection; behaves like [`Mask::First`].
    #[default]
    All,
    /// Channel 0 (red or hue).
    First,
    /// Channel 1 (green or saturation).
    Second,
    /// Channel 2 (blue, lightness or value).
    Third,
}

impl Mask {
    /// Positional channel index selected by this mask.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::All | Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// Mask selecting channel `index`.
    ///
    /// ```
    /// use tint_core::Mask;
    ///
    /// assert_eq!(Mask::from_index(1).unwrap(), Mask::Second);
    /// assert!(Mask::from_index(3).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            2 => Ok(Self::Third),
            n => Err(Error::InvalidChannel(n)),
        }
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            other => write!(f, "{}", other.index()),
        }
    }
}

impl FromStr for Mask {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "0" | "r" | "h" => Ok(Self::First),
            "1" | "g" | "s" => Ok(Self::Second),
            "2" | "b" | "l" | "v" => Ok(Self::Third),
            _ => Err(Error::unknown_mask(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_first_channel() {
        assert_eq!(Mask::default(), Mask::All);
        assert_eq!(Mask::default().index(), 0);
    }

    #[test]
    fn test_from_index() {
        for i in 0..3 {
            assert_eq!(Mask::from_index(i).unwrap().index(), i);
        }
        assert_eq!(Mask::from_index(5), Err(Error::InvalidChannel(5)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("G".parse::<Mask>().unwrap(), Mask::Second);
        assert_eq!("v".parse::<Mask>().unwrap(), Mask::Third);
        assert_eq!("all".parse::<Mask>().unwrap(), Mask::All);
        assert!("alpha".parse::<Mask>().unwrap_err().is_parse_error());
    }

    #[test]
    fn test_display_parses_back() {
        for mask in [Mask::All, Mask::First, Mask::Second, Mask::Third] {
            assert_eq!(mask.to_string().parse::<Mask>().unwrap(), mask);
        }
    }
}
