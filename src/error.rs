//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddressBookError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is stored under the given name
    #[error("Contact not found: {0}")]
    RecordNotFound(String),

    /// The record has no phone with the given value
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the save file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The save file exists but could not be decoded
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The address book could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type BookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::RecordNotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Contact not found: Alice");

        let err = AddressBookError::PhoneNotFound("+12-345-678-901".to_string());
        assert_eq!(err.to_string(), "Phone not found: +12-345-678-901");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
            reason: "Must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_PAGE_SIZE: Must be at least 1"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: AddressBookError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "Name cannot be empty");
        assert!(matches!(
            err,
            AddressBookError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_persistence_io_error_mentions_path() {
        let err = PersistenceError::Io {
            path: PathBuf::from("/tmp/book.dat"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/book.dat"));
        assert!(err.to_string().contains("denied"));
    }
}
