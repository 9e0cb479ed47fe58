//! Name value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name, used as the record key inside an address book.
///
/// Any text is accepted as long as it is not empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(name)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValidatedField for Name {
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(raw))
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
