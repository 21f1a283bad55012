//! Validated adapter registration name.

use super::AdapterNameError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Maximum length for a registration name.
const MAX_NAME_LENGTH: usize = 100;

/// Lowercase alphanumeric-plus-underscores key under which an adapter is
/// reachable in the registry (e.g. `foo`, `ml_classifier`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AdapterName(String);

impl AdapterName {
    /// Creates a validated adapter name.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_]` are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterNameError::Empty`] when the value is empty after
    /// trimming, [`AdapterNameError::InvalidCharacters`] when it contains
    /// characters outside `[a-z0-9_]`, or [`AdapterNameError::TooLong`] when
    /// it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AdapterNameError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(AdapterNameError::Empty);
        }

        if normalized.len() > MAX_NAME_LENGTH {
            return Err(AdapterNameError::TooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !is_valid {
            return Err(AdapterNameError::InvalidCharacters(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AdapterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for AdapterName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AdapterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AdapterName {
    type Error = AdapterNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AdapterName> for String {
    fn from(name: AdapterName) -> Self {
        name.0
    }
}
