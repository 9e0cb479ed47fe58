//! Data models for the address book.
//!
//! This module contains the contact [`Record`] and the [`AddressBook`] that
//! owns records keyed by name, along with its paginated iteration.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Pages};
pub use record::Record;
