//! Conversions between color spaces.
//!
//! # Direct Formulas
//!
//! | From | To | Function |
//! |------|----|----------|
//! | RGB | HSL | [`rgb_to_hsl`] |
//! | HSL | RGB | [`hsl_to_rgb`] |
//! | RGB | HSV | [`rgb_to_hsv`] |
//! | HSV | RGB | [`hsv_to_rgb`] |
//! | NONE | RGB | [`gray_to_rgb`] |
//! | any | NONE | [`to_gray`] (channel projection) |
//!
//! Every other pair is composed as `To <- RGB <- From`.
//!
//! # Hue
//!
//! Hues are always reported in `[0, 360)`. The sector formula can yield a
//! negative angle (red is the largest channel and green < blue); it is
//! wrapped. Inverse conversions wrap their input hue before picking a sector.
//!
//! # Example
//!
//! ```rust
//! use tint_color::convert::{convert, to_gray};
//! use tint_core::{AnyPixel, ColorSpace, Mask, Rgb, RawPixel};
//!
//! let rgb = Rgb::from_raw(10, 20, 30);
//! assert_eq!(to_gray(&rgb, Mask::Second).scale, 20);
//!
//! let hsv = convert(AnyPixel::Rgb(rgb), ColorSpace::Hsv, Mask::All);
//! assert_eq!(hsv.space(), ColorSpace::Hsv);
//! ```

use tint_core::math::{approx_eq, wrap_hue};
use tint_core::{AnyPixel, ColorSpace, Gray, Hsl, Hsv, Mask, RawPixel, Rgb};
use tracing::trace;

/// Typed conversion into pixel type `T`.
///
/// Implemented for every ordered pair of [`Gray`], [`Rgb`], [`Hsl`] and
/// [`Hsv`]. Conversions into [`Gray`] keep the channel selected by
/// [`Mask::All`]; use [`to_gray`] to pick another one.
pub trait ConvertTo<T> {
    /// Converts `self` into `T`.
    fn convert_to(&self) -> T;
}

/// How [`convert`] gets from one color space to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPath {
    /// Same space; the pixel is returned unchanged.
    Identity,
    /// A dedicated formula exists for the pair.
    Direct,
    /// Converted to RGB first, then to the target.
    ViaRgb,
}

/// Dispatch table entry for `from -> to`.
pub const fn conversion_path(from: ColorSpace, to: ColorSpace) -> ConversionPath {
    use ColorSpace as S;
    match (from, to) {
        (S::None, S::None) | (S::Rgb, S::Rgb) | (S::Hsl, S::Hsl) | (S::Hsv, S::Hsv) => {
            ConversionPath::Identity
        }
        (S::Rgb, S::Hsl) | (S::Hsl, S::Rgb) | (S::Rgb, S::Hsv) | (S::Hsv, S::Rgb) => {
            ConversionPath::Direct
        }
        (S::None, S::Rgb) | (_, S::None) => ConversionPath::Direct,
        (S::None, S::Hsl) | (S::None, S::Hsv) | (S::Hsl, S::Hsv) | (S::Hsv, S::Hsl) => {
            ConversionPath::ViaRgb
        }
    }
}

// ============================================================================
// Direct formulas
// ============================================================================

/// Hue in degrees shared by HSL and HSV, wrapped into `[0, 360)`.
///
/// Achromatic inputs (chroma within tolerance of 0) have hue 0. The largest
/// channel is found in R, G, B order, so a tie between red and green takes the
/// red branch.
pub fn hue_of(rgb: &Rgb) -> f64 {
    let Rgb { red: r, green: g, blue: b } = *rgb;
    let x_max = rgb.max_channel();
    let chroma = x_max - rgb.min_channel();

    let hue = if approx_eq(chroma, 0.0) {
        0.0
    } else if approx_eq(x_max, r) {
        60.0 * ((g - b) / chroma)
    } else if approx_eq(x_max, g) {
        60.0 * (2.0 + (b - r) / chroma)
    } else {
        60.0 * (4.0 + (r - g) / chroma)
    };
    wrap_hue(hue)
}

/// RGB to HSL.
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let x_max = rgb.max_channel();
    let x_min = rgb.min_channel();
    let lightness = (x_max + x_min) / 2.0;

    let saturation = if approx_eq(lightness, 0.0) || approx_eq(lightness, 1.0) {
        0.0
    } else {
        (x_max - lightness) / lightness.min(1.0 - lightness)
    };

    Hsl::new(hue_of(rgb), saturation, lightness)
}

/// HSL to RGB.
///
/// Uses the hexagon sectors of `H' = hue / 60`. Boundaries are half-open, so
/// `H' == 1` belongs to the second sector. After wrapping, anything at or past
/// `H' == 5` (including float drift up to 6) lands in the last sector.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let l = hsl.lightness;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * hsl.saturation;
    let h = wrap_hue(hsl.hue) / 60.0;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if h < 1.0 {
        (c, x, 0.0)
    } else if h < 2.0 {
        (x, c, 0.0)
    } else if h < 3.0 {
        (0.0, c, x)
    } else if h < 4.0 {
        (0.0, x, c)
    } else if h < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = l - c / 2.0;
    Rgb::new(r1 + m, g1 + m, b1 + m)
}

/// RGB to HSV.
pub fn rgb_to_hsv(rgb: &Rgb) -> Hsv {
    let value = rgb.max_channel();
    let chroma = value - rgb.min_channel();
    let saturation = if approx_eq(value, 0.0) { 0.0 } else { chroma / value };
    Hsv::new(hue_of(rgb), saturation, value)
}

/// HSV to RGB.
///
/// Non-positive saturation is achromatic: every channel equals `value`,
/// whatever the hue.
pub fn hsv_to_rgb(hsv: &Hsv) -> Rgb {
    let v = hsv.value;
    if hsv.saturation <= 0.0 {
        return Rgb::new(v, v, v);
    }

    let s = hsv.saturation;
    let hh = wrap_hue(hsv.hue) / 60.0;
    let sector = hh.floor() as i64;
    let ff = hh - sector as f64;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * ff);
    let t = v * (1.0 - s * (1.0 - ff));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        // sector 5 and any unexpected index
        _ => (v, p, q),
    };
    Rgb::new(r, g, b)
}

/// Grayscale to RGB: the byte is copied into all three channels.
#[inline]
pub fn gray_to_rgb(gray: Gray) -> Rgb {
    let s = gray.scale as i32;
    Rgb::from_raw(s, s, s)
}

/// Projects one 8-bit channel of `pixel` to grayscale.
///
/// The projected value is truncated to its low byte, like
/// [`Gray::from_raw`].
#[inline]
pub fn to_gray<P: RawPixel>(pixel: &P, mask: Mask) -> Gray {
    Gray::from_raw(pixel.channel(mask.index()))
}

// ============================================================================
// Typed conversions
// ============================================================================

macro_rules! identity {
    ($($t:ty),* $(,)?) => {$(
        impl ConvertTo<$t> for $t {
            #[inline]
            fn convert_to(&self) -> $t {
                *self
            }
        }
    )*};
}

macro_rules! direct {
    ($($from:ty => $to:ty : $f:expr),* $(,)?) => {$(
        impl ConvertTo<$to> for $from {
            #[inline]
            fn convert_to(&self) -> $to {
                $f(self)
            }
        }
    )*};
}

macro_rules! via_rgb {
    ($($from:ty => $to:ty),* $(,)?) => {$(
        impl ConvertTo<$to> for $from {
            #[inline]
            fn convert_to(&self) -> $to {
                let rgb: Rgb = self.convert_to();
                rgb.convert_to()
            }
        }
    )*};
}

identity!(Gray, Rgb, Hsl, Hsv);

direct! {
    Rgb => Hsl: rgb_to_hsl,
    Hsl => Rgb: hsl_to_rgb,
    Rgb => Hsv: rgb_to_hsv,
    Hsv => Rgb: hsv_to_rgb,
    Gray => Rgb: |g: &Gray| gray_to_rgb(*g),
    Rgb => Gray: |p: &Rgb| to_gray(p, Mask::All),
    Hsl => Gray: |p: &Hsl| to_gray(p, Mask::All),
    Hsv => Gray: |p: &Hsv| to_gray(p, Mask::All),
}

via_rgb! {
    Gray => Hsl,
    Gray => Hsv,
    Hsl => Hsv,
    Hsv => Hsl,
}

// ============================================================================
// Runtime dispatch
// ============================================================================

/// Converts a runtime-tagged pixel into `to`.
///
/// `mask` only matters when `to` is [`ColorSpace::None`]. Every ordered pair
/// of spaces is handled; see [`conversion_path`].
pub fn convert(pixel: AnyPixel, to: ColorSpace, mask: Mask) -> AnyPixel {
    let from = pixel.space();
    let path = conversion_path(from, to);
    trace!(%from, %to, ?path, "convert");

    match (pixel, to) {
        (p, _) if path == ConversionPath::Identity => p,
        (AnyPixel::Rgb(p), ColorSpace::Hsl) => AnyPixel::Hsl(rgb_to_hsl(&p)),
        (AnyPixel::Hsl(p), ColorSpace::Rgb) => AnyPixel::Rgb(hsl_to_rgb(&p)),
        (AnyPixel::Rgb(p), ColorSpace::Hsv) => AnyPixel::Hsv(rgb_to_hsv(&p)),
        (AnyPixel::Hsv(p), ColorSpace::Rgb) => AnyPixel::Rgb(hsv_to_rgb(&p)),
        (AnyPixel::None(g), ColorSpace::Rgb) => AnyPixel::Rgb(gray_to_rgb(g)),
        (AnyPixel::Rgb(p), ColorSpace::None) => AnyPixel::None(to_gray(&p, mask)),
        (AnyPixel::Hsl(p), ColorSpace::None) => AnyPixel::None(to_gray(&p, mask)),
        (AnyPixel::Hsv(p), ColorSpace::None) => AnyPixel::None(to_gray(&p, mask)),
        (p, to) => {
            // Every space has a direct path to RGB and RGB has one to every
            // space, so this recurses at most twice.
            let rgb = convert(p, ColorSpace::Rgb, mask);
            convert(rgb, to, mask)
        }
    }
}
