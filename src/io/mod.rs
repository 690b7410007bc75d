//! Configuration, validation and error handling

/// Process-wide constants and defaults
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Grid options and their eager validation
pub mod options;
