//! Asynchronous implementation of the record store
//!
//! Same operations and matching rules as [`crate::core::RecordStore`], with
//! storage accessed through [`crate::core::AsyncStorage`]. Both stores share
//! [`crate::core::line_ops`], so they produce identical file contents.
//!
//! Awaiting I/O does not make the store safe for concurrent use: two
//! overlapping operations on the same file can still lose updates.

pub mod record_store;

pub use record_store::AsyncRecordStore;
