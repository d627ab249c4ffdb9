//! Theme colour references and fills
//!
//! Fills either reference one of the theme accent colours or carry an explicit
//! RGB hex value. Every element-style setter resolves accents through
//! [`AccentColor::scheme_token`] so the accent mapping lives in one place.

use crate::{Result, SlideModelError};
use serde::{Deserialize, Serialize};

/// Theme accent slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccentColor {
    Accent1,
    Accent2,
    Accent3,
    Accent4,
}

impl AccentColor {
    /// DrawingML scheme colour token (`a:schemeClr/@val`)
    pub fn scheme_token(self) -> &'static str {
        match self {
            AccentColor::Accent1 => "accent1",
            AccentColor::Accent2 => "accent2",
            AccentColor::Accent3 => "accent3",
            AccentColor::Accent4 => "accent4",
        }
    }

    /// Parse a scheme token back into an accent
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "accent1" => Some(AccentColor::Accent1),
            "accent2" => Some(AccentColor::Accent2),
            "accent3" => Some(AccentColor::Accent3),
            "accent4" => Some(AccentColor::Accent4),
            _ => None,
        }
    }
}

impl TryFrom<u8> for AccentColor {
    type Error = SlideModelError;

    fn try_from(index: u8) -> Result<Self> {
        match index {
            1 => Ok(AccentColor::Accent1),
            2 => Ok(AccentColor::Accent2),
            3 => Ok(AccentColor::Accent3),
            4 => Ok(AccentColor::Accent4),
            other => Err(SlideModelError::InvalidAccent(other)),
        }
    }
}

/// Solid fill of a shape body or outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    /// Theme accent reference
    Scheme(AccentColor),
    /// Explicit colour as a six-digit hex string without `#`
    Rgb(String),
}

impl Fill {
    /// Create an RGB fill, normalising to upper-case hex without a leading `#`.
    /// Returns `None` when the input is not six hex digits.
    pub fn rgb(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Fill::Rgb(hex.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Colour token as written to the document: scheme name or hex value
    pub fn token(&self) -> &str {
        match self {
            Fill::Scheme(accent) => accent.scheme_token(),
            Fill::Rgb(hex) => hex,
        }
    }
}
