//! Address Book - a personal contact manager.
//!
//! Contacts are kept in memory as validated records, searched and paged
//! through in insertion order, and persisted to a single save file.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (`Name`, `Phone`, `Birthday`)
//! - **models**: `Record` and the name-keyed `AddressBook`
//! - **repositories**: Loading and saving the whole book (`FileRepository`)
//! - **shell**: Interactive text menu driving the book
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod shell;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidatedField, ValidationError};
pub use error::{AddressBookError, ConfigError, PersistenceError};
pub use models::{AddressBook, Pages, Record};
pub use repositories::{AddressBookRepository, FileRepository};
pub use shell::Shell;
