use crate::error::{PersistenceError, PersistenceResult};
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Address book repository backed by a single JSON file.
///
/// Saves go to a sibling temporary file that is then renamed over the
/// target, so an interrupted write never truncates the previous save.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    /// Create a repository for the file at `path`. Nothing is touched until
    /// the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl AddressBookRepository for FileRepository {
    fn load(&self) -> PersistenceResult<AddressBook> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No save file yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let book: AddressBook =
            serde_json::from_slice(&content).map_err(|source| PersistenceError::Decode {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
            }
        }

        let content = serde_json::to_vec_pretty(book)?;
        let tmp = self.temp_path();
        fs::write(&tmp, &content).map_err(|e| self.io_error(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.io_error(&self.path, e));
        }

        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
