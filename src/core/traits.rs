//! Core traits for catalog storage
//!
//! The record store only needs three primitives from whatever holds the
//! catalog text: read everything, replace everything, append to the end.
//! Abstracting them lets the same store logic run against a file, an
//! in-memory buffer, or an async file handle.

use crate::types::CatalogError;
use std::future::Future;

/// Whole-content storage for the catalog text
///
/// Implementations can be file backed ([`crate::io::FileStorage`]) or in
/// memory ([`crate::io::MemoryStorage`]).
pub trait Storage {
    /// Read the entire contents
    fn read_all(&self) -> Result<String, CatalogError>;

    /// Replace the entire contents
    fn write_all(&mut self, contents: &str) -> Result<(), CatalogError>;

    /// Append text to the end of the contents
    fn append(&mut self, contents: &str) -> Result<(), CatalogError>;
}

/// Async counterpart of [`Storage`]
pub trait AsyncStorage {
    /// Read the entire contents
    fn read_all(&self) -> impl Future<Output = Result<String, CatalogError>> + Send;

    /// Replace the entire contents
    fn write_all(&mut self, contents: &str)
        -> impl Future<Output = Result<(), CatalogError>> + Send;

    /// Append text to the end of the contents
    fn append(&mut self, contents: &str) -> impl Future<Output = Result<(), CatalogError>> + Send;
}
