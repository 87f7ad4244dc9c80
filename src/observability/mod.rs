//! Observability: tracing subscriber setup.
//!
//! Spans and events are emitted throughout the storage, library, and shell
//! layers via the `tracing` macros; this module wires them to a log file so
//! they never interleave with the interactive menu on stdout.

pub mod init;

pub use init::init_tracing;
