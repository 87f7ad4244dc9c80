//! Storage record models for the persistence layer.
//!
//! This module defines the raw storage record type used for persistence
//! operations. It is separate from the domain model to maintain a clear
//! boundary between the on-disk representation and business logic: the field
//! names here are the file format's stable keys.

use crate::domain::Book;
use serde::{Deserialize, Serialize};

/// One book as persisted on disk.
///
/// The serialized field names (`title`, `author`, `publication_year`,
/// `genre`, `read`) are the stable keys of the file format. There are no
/// serde defaults: a document missing any field fails to parse, and the load
/// path treats it as a malformed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title as entered.
    pub title: String,

    /// Author name as entered.
    pub author: String,

    /// Year of publication.
    pub publication_year: i32,

    /// Free-text genre label.
    pub genre: String,

    /// Whether the user has finished the book.
    pub read: bool,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            publication_year: book.publication_year,
            genre: book.genre.clone(),
            read: book.read,
        }
    }
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            title: record.title,
            author: record.author,
            publication_year: record.publication_year,
            genre: record.genre,
            read: record.read,
        }
    }
}
