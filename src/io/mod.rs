//! I/O module
//!
//! Handles catalog storage and the line format.
//!
//! # Components
//!
//! - `csv_format` - Line format handling (splitting, parsing, encoding, output)
//! - `storage` - Synchronous file and in-memory storage
//! - `async_storage` - Asynchronous file storage on tokio

pub mod async_storage;
pub mod csv_format;
pub mod storage;

pub use async_storage::AsyncFileStorage;
pub use csv_format::{write_record_line, write_records};
pub use storage::{FileStorage, MemoryStorage};
