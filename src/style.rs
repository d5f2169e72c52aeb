//! Colors used to paint the clock face.

use palette::Srgb;

use crate::error::{Error, Result};

/// Stroke colors for the clock face outline and its hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockStyle {
    /// Outline of the face circle.
    pub face: Srgb<u8>,
    /// Hour and minute hands.
    pub hands: Srgb<u8>,
}

impl ClockStyle {
    /// Blue face outline (#3498db).
    pub const DEFAULT_FACE: Srgb<u8> = Srgb::new(52, 152, 219);

    /// Dark slate hands (#2c3e50).
    pub const DEFAULT_HANDS: Srgb<u8> = Srgb::new(44, 62, 80);

    pub fn new(face: Srgb<u8>, hands: Srgb<u8>) -> Self {
        Self { face, hands }
    }

    /// Builds a style from two hex strings such as `"#3498db"`.
    pub fn from_hex(face: &str, hands: &str) -> Result<Self> {
        Ok(Self::new(parse_hex(face)?, parse_hex(hands)?))
    }
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FACE, Self::DEFAULT_HANDS)
    }
}

/// Parses a hex color with or without a leading `#`.
pub fn parse_hex(value: &str) -> Result<Srgb<u8>> {
    value.trim().parse::<Srgb<u8>>().map_err(|_| Error::InvalidColor {
        value: value.to_string(),
    })
}

/// Formats a color as lowercase `#rrggbb`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
