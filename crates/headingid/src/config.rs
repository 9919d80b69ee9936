// Options for identifier generation.
//
// The host owns its configuration file; these types only describe the
// section it may embed, e.g.
//
// [heading_ids]
// separator = "_"
// heading_fallback = "section"

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::slug::slugify;

pub const DEFAULT_HEADING_FALLBACK: &str = "heading";
pub const DEFAULT_FALLBACK: &str = "id";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("separator must be one of `-`, `_`, `.` or `~`, got {0:?}")]
    InvalidSeparator(String),

    #[error("{0} must not be empty")]
    EmptyFallback(&'static str),

    #[error("{field} must already be a slug, got {value:?}")]
    InvalidFallback { field: &'static str, value: String },
}

/// The byte used to join words in a slug and to attach numeric suffixes.
///
/// Limited to the unreserved URL punctuation, so ids built with it are valid
/// fragment identifiers and attribute values without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Separator(u8);

const ALLOWED_SEPARATORS: &[u8] = b"-_.~";

impl Separator {
    pub const DASH: Separator = Separator(b'-');

    pub fn new(byte: u8) -> Result<Self, ConfigError> {
        if ALLOWED_SEPARATORS.contains(&byte) {
            Ok(Self(byte))
        } else {
            Err(ConfigError::InvalidSeparator(char::from(byte).escape_default().to_string()))
        }
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::DASH
    }
}

impl TryFrom<String> for Separator {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_bytes() {
            [byte] => Self::new(*byte),
            _ => Err(ConfigError::InvalidSeparator(value)),
        }
    }
}

impl From<Separator> for String {
    fn from(separator: Separator) -> Self {
        separator.as_char().to_string()
    }
}

/// Identifier generation options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct IdOptions {
    /// Separator for slug words and collision suffixes.
    pub separator: Separator,
    /// Used when a heading's text produces an empty slug.
    pub heading_fallback: String,
    /// Used when any other element's text produces an empty slug.
    pub fallback: String,
}

impl Default for IdOptions {
    fn default() -> Self {
        Self {
            separator: Separator::DASH,
            heading_fallback: DEFAULT_HEADING_FALLBACK.to_string(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl IdOptions {
    /// Check that both fallback tokens are non-empty slugs under `separator`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_fallback("heading_fallback", &self.heading_fallback, self.separator)?;
        validate_fallback("fallback", &self.fallback, self.separator)
    }
}

fn validate_fallback(
    field: &'static str,
    value: &str,
    separator: Separator,
) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyFallback(field));
    }
    if slugify(value, separator) != value {
        return Err(ConfigError::InvalidFallback { field, value: value.to_string() });
    }
    Ok(())
}
