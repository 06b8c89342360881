//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Raw and typed catalog records
//! - `key`: Lookup keys and their comparison modes
//! - `error`: Error types for the catalog

pub mod error;
pub mod key;
pub mod record;

pub use error::CatalogError;
pub use key::RecordKey;
pub use record::{Product, Record};
