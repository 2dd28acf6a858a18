//! Color space identifiers.
//!
//! The set of spaces is closed: grayscale ([`ColorSpace::None`]), [`Rgb`],
//! [`Hsl`] and [`Hsv`]. Each pixel type in [`crate::pixel`] reports its space
//! through [`crate::SpacePixel::SPACE`], and [`crate::AnyPixel`] reports it at
//! runtime.
//!
//! [`Rgb`]: ColorSpace::Rgb
//! [`Hsl`]: ColorSpace::Hsl
//! [`Hsv`]: ColorSpace::Hsv
//!
//! # Usage
//!
//! ```
//! use tint_core::ColorSpace;
//!
//! let space: ColorSpace = "hsl".parse().unwrap();
//! assert_eq!(space, ColorSpace::Hsl);
//! assert_eq!(space.to_string(), "HSL");
//! assert_eq!(space.channel_names(), &["hue", "saturation", "lightness"]);
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A color space a pixel can live in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    /// Single 8-bit grayscale intensity.
    #[default]
    None,
    /// Red, green, blue in [0, 1].
    Rgb,
    /// Hue in degrees, saturation and lightness in [0, 1].
    Hsl,
    /// Hue in degrees, saturation and value in [0, 1].
    Hsv,
}

impl ColorSpace {
    /// All color spaces, in declaration order.
    pub const ALL: [ColorSpace; 4] = [Self::None, Self::Rgb, Self::Hsl, Self::Hsv];

    /// Canonical upper-case name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Hsv => "HSV",
        }
    }

    /// Number of channels a pixel of this space carries.
    #[inline]
    pub const fn channel_count(self) -> usize {
        match self {
            Self::None => 1,
            Self::Rgb | Self::Hsl | Self::Hsv => 3,
        }
    }

    /// Channel labels in storage order.
    pub const fn channel_names(self) -> &'static [&'static str] {
        match self {
            Self::None => &["scale"],
            Self::Rgb => &["red", "green", "blue"],
            Self::Hsl => &["hue", "saturation", "lightness"],
            Self::Hsv => &["hue", "saturation", "value"],
        }
    }

    /// Whether the first channel is a hue angle.
    #[inline]
    pub const fn is_hue_based(self) -> bool {
        matches!(self, Self::Hsl | Self::Hsv)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "gray" | "grey" => Ok(Self::None),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            "hsv" => Ok(Self::Hsv),
            _ => Err(Error::unknown_color_space(s)),
        }
    }
}
