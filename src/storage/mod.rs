//! Persistence layer translating the collection to and from its backing file.
//!
//! This module owns the catalog's on-disk representation: a pretty-printed
//! JSON array of book objects with stable field names. Loading is best-effort
//! (missing or malformed files yield an empty collection with a notice);
//! saving rewrites the whole file atomically via a temporary file.
//!
//! # Modules
//!
//! - `json`: JSON file load/save with atomic writes
//! - `models`: Storage record types separate from domain models

pub mod json;
pub mod models;

pub use json::{JsonStorage, LoadOutcome};
pub use models::BookRecord;
