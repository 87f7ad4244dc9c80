//! Shelfkeeper: an interactive personal library catalog.
//!
//! Shelfkeeper maintains a catalog of book records (title, author,
//! publication year, genre, read status) behind a numbered terminal menu,
//! and persists them to a human-readable JSON file:
//! - Add, remove, search, list, and statistics operations over the catalog
//! - Case-insensitive exact-title removal with positional disambiguation of
//!   duplicates
//! - Case-insensitive substring search by title or author
//! - Reading statistics with a genre histogram and oldest/newest books
//! - One load at startup, one save on exit (or interrupt), atomic writes
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary Shim (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell Layer (shell/)                               │  ← Menu state machine
//! │  - Input validation loops                           │  ← Error containment
//! │  - Action dispatch                                  │
//! │  - Presentation                                     │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐       ┌───────────────────┐
//! │ Library Layer     │       │ Storage Layer     │
//! │ (library/)        │       │ (storage/)        │
//! │ - Collection ops  │       │ - JSON I/O        │
//! │ - Statistics      │       │ - Atomic writes   │
//! └───────────────────┘       └───────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - File locations (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Book model (domain/book)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - File-backed tracing subscriber                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core domain types (Book, errors)
//! - [`library`]: The in-memory collection and statistics
//! - [`storage`]: JSON file persistence
//! - [`shell`]: The interactive menu loop
//! - [`infrastructure`]: File locations
//! - [`observability`]: Tracing setup (internal)
//!
//! # Configuration
//!
//! An optional `shelfkeeper.toml` in the working directory:
//!
//! ```toml
//! library_path = "books/library.json"
//! trace_level = "debug"
//! ```
//!
//! Both keys are optional; a missing or malformed file yields the defaults.
//!
//! # Session Flow
//!
//! 1. **Startup** (`main.rs`): load configuration, initialize tracing,
//!    best-effort load of the catalog file (missing or malformed files start
//!    an empty catalog, with a notice)
//! 2. **Menu loop** (`shell/`): read a choice, validate, dispatch, print,
//!    repeat
//! 3. **Exit**: chosen explicitly or triggered by end of input; either way
//!    the whole catalog is written back atomically
//!
//! # Example
//!
//! ```
//! use shelfkeeper::domain::Book;
//! use shelfkeeper::library::{compute, Library};
//!
//! let mut library = Library::new();
//! library.add(Book::new("Dune", "Frank Herbert", 1965, "SciFi", true));
//!
//! let stats = compute(&library);
//! assert_eq!(stats.total, 1);
//! assert_eq!(stats.genres[0].genre, "SciFi");
//! ```

pub mod domain;
pub mod infrastructure;
pub mod library;
pub mod shell;
pub mod storage;

pub mod observability;

pub use domain::{Book, Result, ShelfkeeperError};
pub use library::{Library, LibraryStats};
pub use shell::Shell;
pub use storage::{JsonStorage, LoadOutcome};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Session configuration, read from the optional TOML file.
///
/// Every field has a default, so an absent configuration file is the common
/// case, not an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the catalog file.
    ///
    /// Default: `library.json`, working-directory relative.
    pub library_path: PathBuf,

    /// Tracing level for the session log.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: infrastructure::default_library_path(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file, falling back to defaults.
    ///
    /// A missing file yields the defaults silently; a file that fails to read
    /// or parse yields the defaults with a warning in the log. Configuration
    /// problems never stop a session.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shelfkeeper::Config;
    /// use std::path::Path;
    ///
    /// let config = Config::load(Path::new("shelfkeeper.toml"));
    /// println!("catalog at {}", config.library_path.display());
    /// ```
    #[must_use]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "failed to read config file, using defaults");
                return Self::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "failed to parse config file, using defaults");
                Self::default()
            }
        }
    }
}
