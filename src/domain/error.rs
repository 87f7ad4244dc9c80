//! Error types for the Shelfkeeper catalog.
//!
//! This module defines the centralized error type [`ShelfkeeperError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error;

/// The main error type for Shelfkeeper operations.
///
/// This enum consolidates all error conditions that can occur during a session,
/// from persistence failures to configuration issues. Invalid user input is never
/// represented here: input validators return a value-or-rejection result and the
/// shell re-prompts locally, so bad input cannot propagate as an error.
///
/// # Examples
///
/// ```
/// use shelfkeeper::domain::ShelfkeeperError;
///
/// fn write_catalog() -> Result<(), ShelfkeeperError> {
///     Err(ShelfkeeperError::Storage("failed to write file".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ShelfkeeperError {
    /// Persistence operation failed.
    ///
    /// Occurs when serializing the catalog or writing it to disk fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file is present but malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input stream ended while the shell was waiting for the user.
    ///
    /// Raised when end-of-input is observed at any prompt. The shell loop treats
    /// this as the cancellation signal: it transitions to the exit state and
    /// saves the catalog, exactly as if the user had chosen to exit. It is never
    /// reported to the user as an error.
    #[error("input interrupted")]
    Interrupted,
}

/// A specialized `Result` type for Shelfkeeper operations.
///
/// This is a type alias for `std::result::Result<T, ShelfkeeperError>` that
/// simplifies function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use shelfkeeper::domain::Result;
///
/// fn save_catalog() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ShelfkeeperError>;
