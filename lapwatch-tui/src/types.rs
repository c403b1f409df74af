use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

/// A `#rgb` or `#rrggbb` color, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    raw: String,
    rgb: (u8, u8, u8),
}

impl HexColor {
    pub fn parse(s: &str) -> Result<Self, HexColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| HexColorError::MissingHash(s.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HexColorError::BadDigit(s.to_string()));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| HexColorError::BadDigit(s.to_string()))
        };

        let rgb = match digits.len() {
            // "#9ab" expands to "#99aabb"
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 0x11);
                (expand(0)?, expand(1)?, expand(2)?)
            }
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ),
            _ => return Err(HexColorError::BadLength(s.to_string())),
        };

        Ok(Self {
            raw: s.to_string(),
            rgb,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    /// True when both colors name the same RGB value, ignoring case and short/long form.
    pub fn same_color(&self, other: &HexColor) -> bool {
        self.rgb == other.rgb
    }

    pub fn to_color(&self) -> Color {
        let (r, g, b) = self.rgb;
        Color::Rgb(r, g, b)
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn contrast_text(&self) -> Color {
        let (r, g, b) = self.rgb;
        let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
        if luma > 150_000 {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.raw
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Builds a color from a literal known to be valid.
#[cfg(test)]
pub fn hex(s: &str) -> HexColor {
    HexColor::parse(s).expect("valid hex literal")
}
