use crate::error::PersistenceResult;
use crate::models::AddressBook;

/// Durable storage for a whole address book.
///
/// Provides abstraction over where the book lives, enabling different
/// implementations (file on disk, in-memory mock).
pub trait AddressBookRepository {
    /// Load the stored book.
    ///
    /// A store that does not exist yet yields an empty book. Every other
    /// failure is returned to the caller.
    fn load(&self) -> PersistenceResult<AddressBook>;

    /// Overwrite the stored book with `book`.
    fn save(&self, book: &AddressBook) -> PersistenceResult<()>;
}
