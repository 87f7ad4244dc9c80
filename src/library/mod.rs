//! The in-memory book collection and its query operations.
//!
//! This module is the heart of the catalog: the ordered [`Library`] collection
//! with its add/remove/find operations, and the statistics aggregation that
//! summarizes it. Persistence lives in [`crate::storage`]; presentation lives
//! in [`crate::shell`].
//!
//! # Modules
//!
//! - `collection`: The ordered collection and its mutation/search operations
//! - `stats`: Summary statistics (totals, percentages, histogram, extremes)

pub mod collection;
pub mod stats;

pub use collection::{Library, RemoveOutcome};
pub use stats::{compute, GenreCount, LibraryStats};
