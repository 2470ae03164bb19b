//! Core types and error handling for the skip-list index
//!
//! This crate contains the fundamental types shared across the skip-list
//! workspace. It provides:
//!
//! - Common error types with [`Error`] and [`Result`]
//! - The [`ItemPointer`] handle type the index maps keys to
//!
//! # Example
//!
//! ```
//! use skiplist_core::ItemPointer;
//!
//! let ptr: ItemPointer = 42;
//! ```

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
