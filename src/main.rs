//! Binary entry point.
//!
//! A thin shim over the library layers: resolve configuration, initialize
//! tracing, perform the startup load (reporting its outcome), and hand the
//! terminal to the shell loop. All behavior lives in the library crate so
//! scripted sessions can exercise it in tests.

use shelfkeeper::infrastructure;
use shelfkeeper::library::Library;
use shelfkeeper::shell::Shell;
use shelfkeeper::storage::{JsonStorage, LoadOutcome};
use shelfkeeper::Config;
use std::io::{self, Write as _};

fn main() {
    let config = Config::load(&infrastructure::config_path());
    shelfkeeper::observability::init_tracing(&config);

    tracing::info!(library_path = ?config.library_path, "session starting");

    let storage = JsonStorage::new(config.library_path.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let library = match storage.load() {
        LoadOutcome::Loaded(books) => {
            let _ = writeln!(out, "Library loaded from {}.", storage.path().display());
            Library::from_books(books)
        }
        LoadOutcome::Missing => {
            let _ = writeln!(out, "No saved library found. Starting with an empty library.");
            Library::new()
        }
        LoadOutcome::Malformed(reason) => {
            let _ = writeln!(out, "Error loading library: {reason}");
            Library::new()
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), out, library, storage);

    if let Err(e) = shell.run() {
        // Only output failures escape the loop; nothing useful is left to print.
        tracing::error!(error = %e, "session ended abnormally");
    } else {
        tracing::info!("session ended");
    }
}
