//! JSON file-based persistence for the catalog.
//!
//! The entire collection is written as one pretty-printed JSON array of book
//! objects; that array is the system's whole wire format. Writes go to a
//! temporary file first and are renamed into place, so a failed write leaves
//! the previous file intact.
//!
//! Loading is best-effort: a missing file and a malformed file both leave the
//! session with an empty collection, distinguished only by the message shown
//! to the user. Nothing is repaired or partially recovered.

use crate::domain::{Book, Result, ShelfkeeperError};
use crate::storage::models::BookRecord;
use std::path::{Path, PathBuf};

/// Result of a best-effort load of the catalog file.
///
/// Loading never fails at the API level; callers translate each variant into
/// the appropriate user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and parsed; the collection should be replaced
    /// wholesale with these books, in file order.
    Loaded(Vec<Book>),

    /// The file does not exist. The session starts with an empty collection.
    Missing,

    /// The file exists but could not be read or parsed. The session starts
    /// with an empty collection; the string describes what went wrong.
    Malformed(String),
}

/// JSON file persistence for the book collection.
///
/// Holds only the target path: the collection itself lives in
/// [`crate::library::Library`], and the whole file is read or written within
/// each call. One load at startup, one save on exit.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    /// Path to the catalog file on disk.
    file_path: PathBuf,
}

impl JsonStorage {
    /// Creates a storage handle for the given catalog file path.
    ///
    /// No I/O happens here; the file is touched only by [`load`](Self::load)
    /// and [`save`](Self::save).
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Returns the catalog file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads the whole catalog file, best-effort.
    ///
    /// Returns [`LoadOutcome::Missing`] when the file does not exist,
    /// [`LoadOutcome::Malformed`] on any read or parse failure, and
    /// [`LoadOutcome::Loaded`] with the books in file order on success.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shelfkeeper::storage::{JsonStorage, LoadOutcome};
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("library.json"));
    /// if let LoadOutcome::Loaded(books) = storage.load() {
    ///     println!("{} books", books.len());
    /// }
    /// ```
    #[must_use]
    pub fn load(&self) -> LoadOutcome {
        let _span = tracing::debug_span!("storage_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("catalog file missing, starting empty");
            return LoadOutcome::Missing;
        }

        let contents = match std::fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read catalog file");
                return LoadOutcome::Malformed(e.to_string());
            }
        };

        match serde_json::from_str::<Vec<BookRecord>>(&contents) {
            Ok(records) => {
                tracing::debug!(book_count = records.len(), "catalog loaded");
                LoadOutcome::Loaded(records.into_iter().map(Book::from).collect())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse catalog file");
                LoadOutcome::Malformed(e.to_string())
            }
        }
    }

    /// Writes the whole collection to disk as a pretty-printed JSON array.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so the previous file survives a failed write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the temporary file cannot be
    /// written or renamed. Callers report the failure and keep the session
    /// running.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        let _span = tracing::debug_span!(
            "storage_save",
            path = ?self.file_path,
            book_count = books.len()
        )
        .entered();

        let records: Vec<BookRecord> = books.iter().map(BookRecord::from).collect();
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| ShelfkeeperError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("catalog saved");
        Ok(())
    }
}
