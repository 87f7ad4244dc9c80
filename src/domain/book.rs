//! Book domain model and operations.
//!
//! This module defines the core `Book` type representing a single catalog entry.
//! A book carries no identity beyond its fields: duplicate titles are allowed to
//! accumulate and are only told apart by their position in the catalog when one
//! of them is removed.

use chrono::Datelike;

/// A single book entry in the catalog.
///
/// Fields are accepted as entered; the only validated field is
/// `publication_year`, which the input layer constrains to
/// `[0, current_year]` before a `Book` is ever constructed. Empty strings are
/// legal values for the text fields.
///
/// # Fields
///
/// - `title`: Book title, matched case-insensitively by search and removal
/// - `author`: Author name, matched case-insensitively by search
/// - `publication_year`: Year of publication, `0..=current_year`
/// - `genre`: Free-text genre label, grouped verbatim by statistics
/// - `read`: Whether the user has finished the book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    /// Creates a new book from already-validated fields.
    ///
    /// No validation happens at this layer; the shell's input loops guarantee
    /// the year range before construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfkeeper::domain::Book;
    ///
    /// let book = Book::new("Dune", "Frank Herbert", 1965, "SciFi", true);
    /// assert_eq!(book.title, "Dune");
    /// assert!(book.read);
    /// ```
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
            read,
        }
    }

    /// Returns true if this book's title equals `title`, ignoring case.
    ///
    /// This is the matching rule used for removal: exact title, any casing.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfkeeper::domain::Book;
    ///
    /// let book = Book::new("Dune", "Frank Herbert", 1965, "SciFi", false);
    /// assert!(book.title_matches("dune"));
    /// assert!(!book.title_matches("dun"));
    /// ```
    #[must_use]
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// Returns the current calendar year, the upper bound for publication years.
///
/// Uses the local clock, matching what the user sees on their calendar.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
