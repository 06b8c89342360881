//! Error types for the product catalog
//!
//! This module defines all error types that can occur while operating on a
//! catalog file.
//!
//! # Error Categories
//!
//! - **Record Errors**: duplicate ids on add, missing ids on delete
//! - **File I/O Errors**: missing file, permission denied, etc. The original
//!   `std::io::Error` is kept as the source so its kind can be inspected.
//! - **Format Errors**: unparseable prices, CSV writer failures
//!
//! A lookup that finds nothing is not an error: `get` returns `None`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A record with this id already exists
    ///
    /// Raised by `add`. The file is left untouched.
    #[error("Product with id '{id}' already exists")]
    DuplicateKey {
        /// The id that is already present
        id: String,
    },

    /// No record with this id exists
    ///
    /// Raised by `delete`. The file is left untouched.
    #[error("Product with id '{id}' not found")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// I/O error while reading or writing the catalog file
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File the operation was performed on
        path: PathBuf,
        /// Underlying error, untranslated
        #[source]
        source: std::io::Error,
    },

    /// Record fields could not be converted to a typed product
    #[error("Invalid record '{id}': {message}")]
    InvalidRecord {
        /// Id field of the offending record
        id: String,
        /// Description of the conversion failure
        message: String,
    },

    /// Failure while encoding records as CSV
    #[error("CSV encoding error: {message}")]
    Encoding {
        /// Description of the encoding error
        message: String,
    },

    /// The async runtime could not be started
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the runtime error
        message: String,
    },
}

// Conversion from csv::Error to CatalogError
impl From<csv::Error> for CatalogError {
    fn from(error: csv::Error) -> Self {
        CatalogError::Encoding {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl CatalogError {
    /// Create a DuplicateKey error
    pub fn duplicate_key(id: impl ToString) -> Self {
        CatalogError::DuplicateKey { id: id.to_string() }
    }

    /// Create a NotFound error
    pub fn not_found(id: impl ToString) -> Self {
        CatalogError::NotFound { id: id.to_string() }
    }

    /// Create an Io error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidRecord error
    pub fn invalid_record(id: &str, message: impl Into<String>) -> Self {
        CatalogError::InvalidRecord {
            id: id.to_string(),
            message: message.into(),
        }
    }

    /// Kind of the underlying I/O error, if this is one
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            CatalogError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
