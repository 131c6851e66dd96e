//! Input/output: configuration, errors, layout files and the CLI

/// Command-line parsing and batch file processing
pub mod cli;
/// Snapping constants and configuration defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Layout file format
pub mod layout;
/// Progress display for multi-file runs
pub mod progress;
