use address_book::error::{PersistenceError, PersistenceResult};
use address_book::models::AddressBook;
use address_book::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the saved book as encoded JSON, so a load after a save goes through
/// the same decoding as the file repository. Tracks method calls for
/// verification and can be told to fail saves.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRepository {
    stored: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockRepository {
    /// Create a new empty MockRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: &AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(serde_json::to_string(book).unwrap());
        repo
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Decode the last saved book, if any.
    pub fn saved_book(&self) -> Option<AddressBook> {
        let stored = self.stored.lock().unwrap();
        stored
            .as_deref()
            .map(|json| serde_json::from_str(json).unwrap())
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl AddressBookRepository for MockRepository {
    fn load(&self) -> PersistenceResult<AddressBook> {
        self.track_call("load");

        let stored = self.stored.lock().unwrap();
        match stored.as_deref() {
            Some(json) => serde_json::from_str(json).map_err(|source| PersistenceError::Decode {
                path: "mock".into(),
                source,
            }),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(PersistenceError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }

        let json = serde_json::to_string(book)?;
        *self.stored.lock().unwrap() = Some(json);
        Ok(())
    }
}
