//! Interactive shell layer: the menu state machine and its input handling.
//!
//! This layer presents the numbered menu, validates all user input through
//! local re-prompt loops, dispatches to the library and storage layers, and
//! contains every recoverable error so the session always returns to the
//! menu. It is the only layer that talks to the terminal.
//!
//! # Modules
//!
//! - [`menu`]: Menu state machine enums and choice parsing
//! - [`input`]: Value-or-reason validators backing the re-prompt loops
//! - [`session`]: The [`Shell`] driver and its run loop
//!
//! # Example
//!
//! ```no_run
//! use shelfkeeper::library::Library;
//! use shelfkeeper::shell::Shell;
//! use shelfkeeper::storage::JsonStorage;
//! use std::io::Cursor;
//! use std::path::PathBuf;
//!
//! let storage = JsonStorage::new(PathBuf::from("/tmp/doctest-library.json"));
//! let input = Cursor::new("6\n");
//! let mut output = Vec::new();
//! let mut shell = Shell::new(input, &mut output, Library::new(), storage);
//! shell.run()?;
//! # Ok::<(), shelfkeeper::domain::ShelfkeeperError>(())
//! ```

pub mod input;
pub mod menu;
pub mod session;

pub use menu::{MenuAction, SearchField};
pub use session::Shell;
