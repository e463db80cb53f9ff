//! RGB and HSV color values and the conversions between
//! them and their textual encodings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A color with 8-bit red, green, and blue channels.
///
/// Equality is exact per-channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Returns a color with the given channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the hexadecimal encoding of this color: a leading
    /// `#` followed by two uppercase hex digits per channel.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns a color decoded from a hexadecimal string,
    /// with or without a leading `#`.
    ///
    /// Six-digit strings are decoded as one two-digit chunk per
    /// channel. Three-digit shorthand is decoded as one single-digit
    /// chunk per channel (channel values `0` through `15`). Any other
    /// length, or any non-hex character, is an error.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let chunk_size = match hex.len() {
            3 => 1,
            6 => 2,
            len => {
                return Err(Error::InvalidColorFormat {
                    message: format!("expected 3 or 6 hex digits, got {}: {}", len, hex),
                });
            }
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat {
                message: format!("non-hex character in: {}", hex),
            });
        }

        let channel = |chunk: &str| {
            u8::from_str_radix(chunk, 16).map_err(|e| Error::InvalidColorFormat {
                message: format!("bad hex chunk {}: {}", chunk, e),
            })
        };

        Ok(Self {
            r: channel(&hex[..chunk_size])?,
            g: channel(&hex[chunk_size..chunk_size * 2])?,
            b: channel(&hex[chunk_size * 2..])?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A color in HSV space: hue in degrees (conceptually `[0, 360)`),
/// saturation and value as percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Returns an HSV color with the given coordinates.
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Converts `hsv` to RGB.
///
/// Hues up to one period outside `[0, 360)` are wrapped back into
/// range by a single correction of ±360 degrees. Hues further out of
/// range, and saturation or value outside `[0, 100]`, are errors
/// rather than being clamped.
pub fn hsv_to_rgb(hsv: Hsv) -> Result<Rgb, Error> {
    if !(0.0..=100.0).contains(&hsv.s) || !(0.0..=100.0).contains(&hsv.v) {
        return Err(Error::InvalidColorFormat {
            message: format!("saturation and value must be in [0, 100]: {:?}", hsv),
        });
    }

    // Wrap the hue back into [0, 360) by at most one period.
    let h = if hsv.h < 0.0 {
        hsv.h + 360.0
    } else if hsv.h >= 360.0 {
        hsv.h - 360.0
    } else {
        hsv.h
    };

    if !(0.0..360.0).contains(&h) {
        return Err(Error::InvalidColorFormat {
            message: format!("hue more than one period out of range: {}", hsv.h),
        });
    }

    let c = (hsv.s * 0.01) * (hsv.v * 0.01);
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = (hsv.v * 0.01) - c;

    // Pre-offset channel values for each 60-degree hue sector.
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

    Ok(Rgb {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    })
}
