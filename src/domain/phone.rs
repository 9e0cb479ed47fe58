//! Phone value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[0-9]{2}-[0-9]{3}-[0-9]{3}-[0-9]{3}$").expect("Failed to compile phone regex")
});

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers must have the exact shape `+DD-DDD-DDD-DDD`: a leading
/// plus sign followed by 2-3-3-3 digit groups separated by hyphens.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("+38-050-123-456").unwrap();
/// assert_eq!(phone.as_str(), "+38-050-123-456");
/// assert!(Phone::new("+380501234567").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` on any deviation from
    /// `+DD-DDD-DDD-DDD`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(phone)
    }

    /// Check whether a raw string is a well-formed phone number.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValidatedField for Phone {
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(ValidationError::InvalidPhoneFormat(raw));
        }
        Ok(Self(raw))
    }

    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
