//! Core catalog logic module
//!
//! This module contains the record management components:
//! - `traits` - Storage abstractions for interchangeable backends
//! - `line_ops` - Pure operations over the catalog text
//! - `record_store` - Synchronous add/get/update/delete
//! - `async` - Asynchronous record store

pub mod r#async;
pub mod line_ops;
pub mod record_store;
pub mod traits;

pub use r#async::AsyncRecordStore;
pub use record_store::RecordStore;
pub use traits::{AsyncStorage, Storage};
