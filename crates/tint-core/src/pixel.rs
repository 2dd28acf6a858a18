//! Pixel types, one per color space.
//!
//! # Types
//!
//! - [`Gray`] - single 8-bit intensity, stored natively as `u8`
//! - [`Rgb`] - red, green, blue normalized to [0, 1]
//! - [`Hsl`] - hue in degrees, saturation and lightness in [0, 1]
//! - [`Hsv`] - hue in degrees, saturation and value in [0, 1]
//! - [`AnyPixel`] - tagged union when the space is only known at runtime
//!
//! # Raw Bytes
//!
//! Three-channel pixels are built from and projected back to 8-bit triples
//! through [`RawPixel`]. The projection is `round(255 * x)` for [0, 1]
//! channels and `round(255 * hue / 360)` for hue, and is lossy:
//!
//! ```
//! use tint_core::prelude::*;
//!
//! let hsl: Hsl = construct_pixel(170, 255, 128);
//! assert!((hsl.hue - 240.0).abs() < 1e-9);
//! assert_eq!(get_raw(&hsl), (170, 255, 128));
//! ```
//!
//! Construction does not validate or clamp. Values outside 0..=255 produce
//! channels outside their nominal range.
//!
//! # Equality
//!
//! Float pixels compare equal when every channel differs by less than
//! [`EPSILON`](crate::math::EPSILON).

use crate::colorspace::ColorSpace;
use crate::math::{approx_eq, dequantize, dequantize_hue, quantize, quantize_hue};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Pixel type bound to a single color space.
pub trait SpacePixel: Copy + fmt::Debug + Send + Sync + 'static {
    /// The space this pixel type lives in.
    const SPACE: ColorSpace;
}

/// Three-channel pixel with an 8-bit construction and projection contract.
pub trait RawPixel: SpacePixel {
    /// Builds a pixel from three 8-bit values (unchecked).
    fn from_raw(a: i32, b: i32, c: i32) -> Self;

    /// 8-bit projection of channel `index` (0, 1 or 2).
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    fn channel(&self, index: usize) -> i32;

    /// 8-bit projection of all three channels.
    #[inline]
    fn raw(&self) -> (i32, i32, i32) {
        (self.channel(0), self.channel(1), self.channel(2))
    }
}

/// Builds a `P` from three 8-bit values.
///
/// ```
/// use tint_core::{construct_pixel, Rgb};
///
/// let p: Rgb = construct_pixel(0, 51, 255);
/// assert!((p.green - 0.2).abs() < 1e-12);
/// ```
#[inline]
pub fn construct_pixel<P: RawPixel>(a: i32, b: i32, c: i32) -> P {
    P::from_raw(a, b, c)
}

/// 8-bit projection of a three-channel pixel.
#[inline]
pub fn get_raw<P: RawPixel>(pixel: &P) -> (i32, i32, i32) {
    pixel.raw()
}

// ============================================================================
// Gray
// ============================================================================

/// Grayscale pixel holding one 8-bit intensity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gray {
    /// Intensity, 0..=255.
    pub scale: u8,
}

impl Gray {
    /// Black.
    pub const BLACK: Gray = Gray::new(0);
    /// White.
    pub const WHITE: Gray = Gray::new(255);

    /// Create a grayscale pixel.
    #[inline]
    pub const fn new(scale: u8) -> Self {
        Self { scale }
    }

    /// Builds from an integer, keeping the low byte.
    #[inline]
    pub const fn from_raw(scale: i32) -> Self {
        Self::new(scale as u8)
    }

    /// The stored byte.
    #[inline]
    pub const fn raw(&self) -> u8 {
        self.scale
    }
}

impl SpacePixel for Gray {
    const SPACE: ColorSpace = ColorSpace::None;
}

impl fmt::Display for Gray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NONE({})", self.scale)
    }
}

// ============================================================================
// Rgb
// ============================================================================

/// RGB pixel with channels normalized to [0, 1].
///
/// Supports unclamped scalar and channel-wise arithmetic (`*`, `+`, `-`).
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
}

impl Rgb {
    /// (1, 1, 1), identical to `Rgb::from_raw(255, 255, 255)`.
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    /// (0, 0, 0).
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    /// Create an RGB pixel from normalized channels.
    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Channels as `[R, G, B]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Create from `[R, G, B]`.
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Largest channel.
    #[inline]
    pub fn max_channel(&self) -> f64 {
        self.red.max(self.green).max(self.blue)
    }

    /// Smallest channel.
    #[inline]
    pub fn min_channel(&self) -> f64 {
        self.red.min(self.green).min(self.blue)
    }

    /// Apply a function to each channel.
    #[inline]
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

impl SpacePixel for Rgb {
    const SPACE: ColorSpace = ColorSpace::Rgb;
}

impl RawPixel for Rgb {
    #[inline]
    fn from_raw(r: i32, g: i32, b: i32) -> Self {
        Self::new(dequantize(r), dequantize(g), dequantize(b))
    }

    #[inline]
    fn channel(&self, index: usize) -> i32 {
        quantize(self.to_array()[index])
    }
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.red, other.red)
            && approx_eq(self.green, other.green)
            && approx_eq(self.blue, other.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({:.6}, {:.6}, {:.6})", self.red, self.green, self.blue)
    }
}

// ============================================================================
// Hsl
// ============================================================================

/// HSL pixel: hue in degrees, saturation and lightness in [0, 1].
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, nominally [0, 360).
    pub hue: f64,
    /// Saturation.
    pub saturation: f64,
    /// Lightness.
    pub lightness: f64,
}

impl Hsl {
    /// Create an HSL pixel.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }
}

impl SpacePixel for Hsl {
    const SPACE: ColorSpace = ColorSpace::Hsl;
}

impl RawPixel for Hsl {
    #[inline]
    fn from_raw(h: i32, s: i32, l: i32) -> Self {
        Self::new(dequantize_hue(h), dequantize(s), dequantize(l))
    }

    #[inline]
    fn channel(&self, index: usize) -> i32 {
        match index {
            0 => quantize_hue(self.hue),
            1 => quantize(self.saturation),
            2 => quantize(self.lightness),
            _ => panic!("HSL channel index {index} out of range"),
        }
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.hue, other.hue)
            && approx_eq(self.saturation, other.saturation)
            && approx_eq(self.lightness, other.lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSL({:.3}, {:.6}, {:.6})", self.hue, self.saturation, self.lightness)
    }
}

// ============================================================================
// Hsv
// ============================================================================

/// HSV pixel: hue in degrees, saturation and value in [0, 1].
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees, nominally [0, 360).
    pub hue: f64,
    /// Saturation.
    pub saturation: f64,
    /// Value (largest RGB channel).
    pub value: f64,
}

impl Hsv {
    /// Create an HSV pixel.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self { hue, saturation, value }
    }
}

impl SpacePixel for Hsv {
    const SPACE: ColorSpace = ColorSpace::Hsv;
}

impl RawPixel for Hsv {
    #[inline]
    fn from_raw(h: i32, s: i32, v: i32) -> Self {
        Self::new(dequantize_hue(h), dequantize(s), dequantize(v))
    }

    #[inline]
    fn channel(&self, index: usize) -> i32 {
        match index {
            0 => quantize_hue(self.hue),
            1 => quantize(self.saturation),
            2 => quantize(self.value),
            _ => panic!("HSV channel index {index} out of range"),
        }
    }
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.hue, other.hue)
            && approx_eq(self.saturation, other.saturation)
            && approx_eq(self.value, other.value)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSV({:.3}, {:.6}, {:.6})", self.hue, self.saturation, self.value)
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

// Raw channel arithmetic for gradient and blend building blocks. Results are
// never clamped; call `Rgb::clamped` when a valid color is needed.

impl Rgb {
    /// Channels clamped into [0, 1].
    #[inline]
    pub fn clamped(self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }
}

impl Mul<Rgb> for f64 {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: Rgb) -> Rgb {
        rhs.map(|c| c * self)
    }
}

impl Mul<f64> for Rgb {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: f64) -> Rgb {
        rhs * self
    }
}

impl Add for Rgb {
    type Output = Rgb;

    #[inline]
    fn add(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.red + rhs.red, self.green + rhs.green, self.blue + rhs.blue)
    }
}

impl Add<f64> for Rgb {
    type Output = Rgb;

    #[inline]
    fn add(self, rhs: f64) -> Rgb {
        self.map(|c| c + rhs)
    }
}

impl Sub for Rgb {
    type Output = Rgb;

    #[inline]
    fn sub(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.red - rhs.red, self.green - rhs.green, self.blue - rhs.blue)
    }
}

// ============================================================================
// AnyPixel
// ============================================================================

/// A pixel whose color space is chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyPixel {
    /// Grayscale.
    None(Gray),
    /// RGB.
    Rgb(Rgb),
    /// HSL.
    Hsl(Hsl),
    /// HSV.
    Hsv(Hsv),
}

impl AnyPixel {
    /// Builds a pixel of `space` from 8-bit values.
    ///
    /// For [`ColorSpace::None`] only `a` is used.
    pub fn construct(space: ColorSpace, a: i32, b: i32, c: i32) -> Self {
        match space {
            ColorSpace::None => Self::None(Gray::from_raw(a)),
            ColorSpace::Rgb => Self::Rgb(Rgb::from_raw(a, b, c)),
            ColorSpace::Hsl => Self::Hsl(Hsl::from_raw(a, b, c)),
            ColorSpace::Hsv => Self::Hsv(Hsv::from_raw(a, b, c)),
        }
    }

    /// The color space of the wrapped pixel.
    #[inline]
    pub const fn space(&self) -> ColorSpace {
        match self {
            Self::None(_) => ColorSpace::None,
            Self::Rgb(_) => ColorSpace::Rgb,
            Self::Hsl(_) => ColorSpace::Hsl,
            Self::Hsv(_) => ColorSpace::Hsv,
        }
    }

    /// 8-bit projection; one value for grayscale, three otherwise.
    pub fn raw(&self) -> Vec<i32> {
        match self {
            Self::None(p) => vec![p.raw() as i32],
            Self::Rgb(p) => tuple_vec(p.raw()),
            Self::Hsl(p) => tuple_vec(p.raw()),
            Self::Hsv(p) => tuple_vec(p.raw()),
        }
    }
}

fn tuple_vec((a, b, c): (i32, i32, i32)) -> Vec<i32> {
    vec![a, b, c]
}

impl Default for AnyPixel {
    fn default() -> Self {
        Self::None(Gray::default())
    }
}

impl fmt::Display for AnyPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None(p) => fmt::Display::fmt(p, f),
            Self::Rgb(p) => fmt::Display::fmt(p, f),
            Self::Hsl(p) => fmt::Display::fmt(p, f),
            Self::Hsv(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl From<Gray> for AnyPixel {
    fn from(p: Gray) -> Self {
        Self::None(p)
    }
}

impl From<Rgb> for AnyPixel {
    fn from(p: Rgb) -> Self {
        Self::Rgb(p)
    }
}

impl From<Hsl> for AnyPixel {
    fn from(p: Hsl) -> Self {
        Self::Hsl(p)
    }
}

impl From<Hsv> for AnyPixel {
    fn from(p: Hsv) -> Self {
        Self::Hsv(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rgb_from_raw() {
        let p = Rgb::from_raw(255, 0, 51);
        assert_abs_diff_eq!(p.red, 1.0);
        assert_abs_diff_eq!(p.green, 0.0);
        assert_abs_diff_eq!(p.blue, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_rgb_raw_roundtrip() {
        for v in 0..=255 {
            let p: Rgb = construct_pixel(v, 255 - v, v / 2);
            assert_eq!(get_raw(&p), (v, 255 - v, v / 2));
        }
    }

    #[test]
    fn test_white_constant() {
        assert_eq!(Rgb::WHITE, Rgb::from_raw(255, 255, 255));
        assert_eq!(Rgb::WHITE.raw(), (255, 255, 255));
    }

    #[test]
    fn test_rgb_equality_tolerance() {
        let a = Rgb::from_raw(10, 20, 30);
        let b = Rgb::from_raw(10, 20, 30);
        assert_eq!(a, b);

        let c = Rgb::new(a.red, a.green + 2e-6, a.blue);
        assert_ne!(a, c);

        let d = Rgb::new(a.red + 5e-7, a.green, a.blue);
        assert_eq!(a, d);
    }

    #[test]
    fn test_construction_is_unchecked() {
        let p = Rgb::from_raw(510, -255, 0);
        assert_abs_diff_eq!(p.red, 2.0);
        assert_abs_diff_eq!(p.green, -1.0);
        assert_eq!(p.raw(), (510, -255, 0));
    }

    #[test]
    fn test_hsl_hue_scaling() {
        let p = Hsl::from_raw(255, 0, 0);
        assert_abs_diff_eq!(p.hue, 360.0, epsilon = 1e-12);
        let p = Hsl::from_raw(128, 255, 128);
        assert_abs_diff_eq!(p.hue, 128.0 / 255.0 * 360.0, epsilon = 1e-12);
        assert_eq!(p.raw(), (128, 255, 128));
    }

    #[test]
    fn test_hsv_raw_accessor() {
        let p = Hsv::new(180.0, 0.5, 1.0);
        assert_eq!(p.raw(), (128, 128, 255));
        assert_eq!(Hsv::from_raw(64, 32, 16).raw(), (64, 32, 16));
    }

    #[test]
    fn test_gray_from_raw_keeps_low_byte() {
        assert_eq!(Gray::from_raw(20).raw(), 20);
        assert_eq!(Gray::from_raw(256 + 7).scale, 7);
    }

    #[test]
    fn test_any_pixel_construct() {
        for space in ColorSpace::ALL {
            let p = AnyPixel::construct(space, 12, 34, 56);
            assert_eq!(p.space(), space);
            assert_eq!(p.raw().len(), space.channel_count());
        }
        assert_eq!(AnyPixel::construct(ColorSpace::None, 12, 34, 56).raw(), vec![12]);
        assert_eq!(AnyPixel::construct(ColorSpace::Hsv, 12, 34, 56).raw(), vec![12, 34, 56]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Gray::new(128).to_string(), "NONE(128)");
        assert_eq!(Rgb::WHITE.to_string(), "RGB(1.000000, 1.000000, 1.000000)");
        assert_eq!(AnyPixel::from(Gray::new(3)).to_string(), "NONE(3)");
    }

    #[test]
    fn test_rgb_arithmetic_is_unclamped() {
        let a = Rgb::new(0.5, 0.3, 0.2);
        let b = Rgb::new(0.1, 0.2, 0.3);

        let sum = a + b;
        assert_abs_diff_eq!(sum.red, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.blue, 0.5, epsilon = 1e-12);

        let scaled = 4.0 * a;
        assert_abs_diff_eq!(scaled.red, 2.0);
        assert_eq!(scaled, a * 4.0);

        let shifted = a + 0.9;
        assert_abs_diff_eq!(shifted.red, 1.4, epsilon = 1e-12);
        assert_abs_diff_eq!((a - b).blue, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_rgb_gradient_step() {
        // Half-way point between black and white built from the helpers.
        let mid = 0.5 * Rgb::BLACK + 0.5 * Rgb::WHITE;
        assert_eq!(mid.raw(), (128, 128, 128));
    }

    #[test]
    fn test_rgb_clamped() {
        let p = Rgb::new(1.4, -0.2, 0.5).clamped();
        assert_eq!(p, Rgb::new(1.0, 0.0, 0.5));
    }

    #[test]
    #[should_panic]
    fn test_channel_index_out_of_range() {
        let _ = Rgb::WHITE.channel(3);
    }
}
