//! Error types for the skip-list index
//!
//! This module defines the error types used throughout the workspace. Per
//! the index's error handling design, most operations report success or
//! failure as a plain `bool` (contention exhaustion and duplicate rejection
//! are expected outcomes, not errors); [`Error`] exists for the handful of
//! genuinely exceptional paths, chiefly allocation failure and invalid
//! configuration.

use thiserror::Error;

/// The main error type for skip-list index operations
#[derive(Error, Debug)]
pub enum Error {
    /// Node allocation failed
    #[error("out of memory while allocating a skip-list node")]
    OutOfMemory,

    /// The supplied `SkipListConfig` is not internally consistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An invalid operation was attempted
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// A specialized Result type for skip-list index operations
pub type Result<T> = std::result::Result<T, Error>;
