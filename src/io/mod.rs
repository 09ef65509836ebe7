//! Input/output operations: CLI driver, configuration, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Chart geometry constants and configuration defaults
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// Batch progress display
pub mod progress;
