//! Styling attribute bag for the progress bar
//!
//! The attribute bag is what a host hands the widget at construction time.
//! Every key is optional; the widget falls back to its own defaults (or the
//! theme's default colors) for anything left unset.

use std::path::Path;

use iced::Color;
use serde::{Deserialize, Serialize};

/// Optional styling attributes recognized by the progress bar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarAttributes {
    /// Corner radius of all three fill regions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    #[serde(with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub primary_progress_color: Option<Color>,
    #[serde(with = "hex_color", skip_serializing_if = "Option::is_none")]
    pub secondary_progress_color: Option<Color>,
    /// Inset of the primary and secondary fills, in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_primary: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_secondary: Option<i32>,
}

impl ProgressBarAttributes {
    /// Parse attributes from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, AttributeError> {
        serde_json::from_str(content).map_err(|e| AttributeError::Parse(e.to_string()))
    }

    /// Load attributes from a JSON file
    ///
    /// The file is read in one go and closed before parsing starts, so the
    /// handle is released on every path.
    pub fn load_from_file(path: &Path) -> Result<Self, AttributeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AttributeError::Io(e.to_string()))?;
        let attributes = Self::from_json_str(&content)?;
        tracing::debug!("Loaded progress bar attributes from {}", path.display());
        Ok(attributes)
    }
}

/// Errors raised while reading an attribute bag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for AttributeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeError::Io(e) => write!(f, "IO error: {}", e),
            AttributeError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for AttributeError {}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when not fully opaque
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional)
///
/// Used instead of `Color`'s `FromStr`, which slices by byte and panics on
/// non-ASCII input; here that input is a parse error like any other.
pub fn parse_hex(raw: &str) -> Option<Color> {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let short = |i: usize| {
        let digit = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
        Some(digit * 17)
    };

    let [r, g, b, a] = match hex.len() {
        3 => [short(0)?, short(1)?, short(2)?, u8::MAX],
        6 => [channel(0)?, channel(2)?, channel(4)?, u8::MAX],
        8 => [channel(0)?, channel(2)?, channel(4)?, channel(6)?],
        _ => return None,
    };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

/// Serde adapter storing optional colors as hex strings
mod hex_color {
    use iced::Color;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(color) => serializer.serialize_str(&super::to_hex(*color)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        super::parse_hex(raw.trim())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid color `{}`", raw)))
    }
}
