//! Infrastructure layer for filesystem locations.
//!
//! This module provides the fixed paths the program uses for its catalog
//! file, configuration file, and log file.

pub mod paths;

pub use paths::{config_path, default_library_path, log_path};
