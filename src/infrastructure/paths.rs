//! Fixed file locations for the session.
//!
//! All three files live in the working directory the program is started
//! from. The catalog path can be overridden through the configuration file;
//! the other two are constants.

use std::path::PathBuf;

/// Default catalog file name, working-directory relative.
const LIBRARY_FILE: &str = "library.json";

/// Configuration file name, working-directory relative.
const CONFIG_FILE: &str = "shelfkeeper.toml";

/// Log file name, working-directory relative.
const LOG_FILE: &str = "shelfkeeper.log";

/// Returns the default catalog file path.
///
/// Used when the configuration file is absent or does not override
/// `library_path`.
#[must_use]
pub fn default_library_path() -> PathBuf {
    PathBuf::from(LIBRARY_FILE)
}

/// Returns the configuration file path.
#[must_use]
pub fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Returns the log file path.
///
/// Logs go to a file because stdout belongs to the interactive menu.
#[must_use]
pub fn log_path() -> PathBuf {
    PathBuf::from(LOG_FILE)
}
