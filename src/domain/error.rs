//! Error types for the sheetstack crate.
//!
//! This module defines the centralized error type [`SheetStackError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! Navigation failures are never surfaced to the user (see
//! [`crate::FallbackPolicy`]); these error values exist for the persistence layer
//! and for internal corrupted-state diagnostics.

use thiserror::Error;

/// The main error type for sheetstack operations.
///
/// This enum consolidates the error conditions that can occur while persisting
/// or restoring navigation state. Variants wrap underlying errors from external
/// crates using `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum SheetStackError {
    /// Instance-state store operation failed.
    ///
    /// Occurs when reading from or writing to the instance-state store fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations during file-backed
    /// instance-state persistence.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing or deserializing persisted navigation state failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A restored history entry could not be decoded into a screen.
    ///
    /// Raised when a persisted record's payload does not match its declared
    /// screen kind, or when the persisted envelope itself is malformed. The
    /// mediator routes this through its fallback policy rather than
    /// propagating it to callers.
    #[error("Corrupted navigation state: {0}")]
    CorruptedState(String),
}

/// A specialized `Result` type for sheetstack operations.
pub type Result<T> = std::result::Result<T, SheetStackError>;
