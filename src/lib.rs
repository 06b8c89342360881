//! Product Catalog Library
//! # Overview
//!
//! This library manages a product catalog kept in a flat CSV file, one
//! `id,name,price` record per line, with a sync and an async strategy for
//! file access.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Record, Product, RecordKey, CatalogError)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic components:
//!   - [`core::record_store`] - Add/get/update/delete over a storage backend
//!   - [`core::line_ops`] - Line matching and rewriting shared by both stores
//!   - [`core::traits`] - Storage abstractions
//! - [`io`] - File and in-memory storage, line format handling
//! - [`strategy`] - Runtime selection between sync and async execution
//!
//! # Operations
//!
//! - **Add**: Append a record; fails if the id already exists
//! - **Get**: Return the first record with the id, or nothing
//! - **Update**: Rewrite name and price in place; a missing id is a no-op
//! - **Delete**: Remove the first record with the id; fails if it is missing
//!
//! # File Format
//!
//! Fields are joined with a comma and never quoted or escaped. A comma or
//! newline inside a name shifts the fields of that record when it is read
//! back. Every operation re-reads the whole file and writes it back in
//! place, without locking: the store expects to be the only writer.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{AsyncRecordStore, AsyncStorage, RecordStore, Storage};
pub use io::{AsyncFileStorage, FileStorage, MemoryStorage};
pub use types::{CatalogError, Product, Record, RecordKey};
