//! Birthday value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date layout used for parsing and display.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono accepts unpadded fields, so the shape is pinned separately.
static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile date regex")
});

/// A birthday stored as an ISO `YYYY-MM-DD` calendar date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-07-15").unwrap();
/// assert_eq!(birthday.as_str(), "1990-07-15");
/// assert!(Birthday::new("2023-02-30").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the value is not
    /// zero-padded `YYYY-MM-DD` or names a day that does not exist.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(birthday)
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        if !DATE_SHAPE_REGEX.is_match(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).ok()
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date this birthday falls on in `year`.
    ///
    /// Feb 29 birthdays fall on Feb 28 in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl ValidatedField for Birthday {
    fn value(&self) -> &str {
        &self.raw
    }

    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        match Self::parse_date(&raw) {
            Some(date) => Ok(Self { raw, date }),
            None => Err(ValidationError::InvalidDateFormat(raw)),
        }
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
