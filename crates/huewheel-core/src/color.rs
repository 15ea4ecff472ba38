//! Color conversions between RGB, HSV and hex strings.
//!
//! Everything here is pure. HSV uses degrees for hue and percents for
//! saturation and value, RGB uses 8-bit channels, hex is `#rrggbb`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result type for color parsing.
pub type ColorResult<T> = Result<T, ColorError>;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation in percent, `[0, 100]`.
    pub s: f64,
    /// Value (brightness) in percent, `[0, 100]`.
    pub v: f64,
}

impl Hsv {
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees, any value (taken modulo 360)
/// * `s` - Saturation (0-100)
/// * `v` - Value/brightness (0-100)
///
/// Sector boundaries use `<`, so a hue of exactly 60 falls in the second
/// sector, 120 in the third, and so on.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = normalize_degrees(h);
    let s = s / 100.0;
    let v = v / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert RGB to HSV.
///
/// Achromatic colors (all channels equal) get a hue of 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsv {
        h: normalize_degrees(h * 60.0),
        s: s * 100.0,
        v: max * 100.0,
    }
}

/// Format a single channel as two lowercase hex digits.
pub fn component_to_hex(c: u8) -> String {
    format!("{:02x}", c)
}

/// Format a color as `#rrggbb` (lowercase).
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!(
        "#{}{}{}",
        component_to_hex(rgb.r),
        component_to_hex(rgb.g),
        component_to_hex(rgb.b)
    )
}

/// Parse a `#rrggbb` string. A single leading `#` is optional, either case is accepted.
pub fn hex_to_rgb(hex: &str) -> ColorResult<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| ColorError::InvalidHex(hex.to_string()))?;

    Ok(Rgb::new(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}
