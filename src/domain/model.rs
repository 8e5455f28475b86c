use crate::utils::error::{JanisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 8 standard terminal colors and their bright variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl BasicColor {
    pub const ALL: [BasicColor; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Offset added to the SGR base code (30 for foreground, 40 for background).
    pub const fn offset(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
            Self::BrightBlack => 60,
            Self::BrightRed => 61,
            Self::BrightGreen => 62,
            Self::BrightYellow => 63,
            Self::BrightBlue => 64,
            Self::BrightMagenta => 65,
            Self::BrightCyan => 66,
            Self::BrightWhite => 67,
        }
    }

    pub fn ansi_code(self, background: bool) -> String {
        let base: u8 = if background { 40 } else { 30 };
        format!("\u{1b}[{}m", base + self.offset())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright_black",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightMagenta => "bright_magenta",
            Self::BrightCyan => "bright_cyan",
            Self::BrightWhite => "bright_white",
        }
    }
}

impl fmt::Display for BasicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BasicColor {
    type Err = JanisError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|color| color.name() == normalized)
            .ok_or_else(|| JanisError::UnknownColor {
                name: s.to_string(),
            })
    }
}

/// A 24-bit color. Components are `u8`, so the 0-255 range always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB` or `#RRGGBB`. In the short form each digit is doubled,
    /// so `#F0A` is `#FF00AA`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        // Length in characters, so a non-ASCII digit is a bad value, not a bad shape.
        let length = hex.chars().count();
        let digits = match hex.strip_prefix('#') {
            Some(digits) if length == 4 || length == 7 => digits,
            _ => {
                return Err(JanisError::InvalidHexFormat {
                    value: hex.to_string(),
                })
            }
        };

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(JanisError::InvalidHexValue {
                value: hex.to_string(),
            });
        }

        let bytes = digits.as_bytes();
        if bytes.len() == 3 {
            return Ok(Self::new(
                hex_digit(bytes[0]) * 17,
                hex_digit(bytes[1]) * 17,
                hex_digit(bytes[2]) * 17,
            ));
        }

        Ok(Self::new(
            hex_digit(bytes[0]) * 16 + hex_digit(bytes[1]),
            hex_digit(bytes[2]) * 16 + hex_digit(bytes[3]),
            hex_digit(bytes[4]) * 16 + hex_digit(bytes[5]),
        ))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// Caller guarantees `b` is an ASCII hex digit.
fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

impl FromStr for Rgb {
    type Err = JanisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = JanisError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Everything a style can carry. When both a basic and an RGB color are set
/// for the same layer, the basic color is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleConfig {
    pub basic_color: Option<BasicColor>,
    pub rgb_color: Option<Rgb>,
    pub bg_basic_color: Option<BasicColor>,
    pub bg_rgb_color: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underlined: bool,
    pub slow_blink: bool,
    pub rapid_blink: bool,
    pub reverse: bool,
    pub hide: bool,
}
