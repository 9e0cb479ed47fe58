//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or whitespace.
    EmptyName,

    /// The provided phone number does not match `+DD-DDD-DDD-DDD`.
    InvalidPhoneFormat(String),

    /// The provided birthday is not a real `YYYY-MM-DD` calendar date.
    InvalidDateFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhoneFormat(phone) => write!(
                f,
                "Invalid phone number format: {} (use '+11-111-111-111')",
                phone
            ),
            Self::InvalidDateFormat(date) => {
                write!(f, "Invalid birthday format: {} (use 'yyyy-mm-dd')", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
