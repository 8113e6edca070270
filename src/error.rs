// src/error.rs

//! Central error type for kokbok
//!
//! Library operations return `kokbok::Result`. Parse failures keep their
//! structured form (see [`FormatError`]) so callers can report the exact
//! line that broke; everything else maps onto the variants below.

use crate::format::FormatError;
use thiserror::Error;

/// Errors surfaced by the kokbok library
#[derive(Debug, Error)]
pub enum Error {
    /// The recipes file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The recipes file violates the sectioned line format
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Positional access outside the collection
    #[error("recipe index {index} out of bounds (collection holds {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A recipe (or a copy of one) matched nothing in the collection
    #[error("recipe '{0}' not found in the collection")]
    NotFound(String),
}

/// Result type for kokbok operations
pub type Result<T> = std::result::Result<T, Error>;
