//! Execution strategy module for catalog commands
//!
//! This module defines the Strategy pattern for running a catalog command
//! end to end: opening the store, performing the operation, and writing any
//! result to output. Synchronous and asynchronous file access can be
//! selected at runtime; both produce identical file contents and output.

use crate::cli::{Command, StrategyType};
use crate::types::CatalogError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::AsyncStrategy;
pub use sync::SyncStrategy;

/// Execution strategy trait for catalog commands
pub trait ExecutionStrategy: Send + Sync {
    /// Run `command` against the catalog file at `path`
    ///
    /// `get` writes the matching line to `output`, `list` writes a CSV
    /// table. A `get` without a match writes nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Returns the store's error for a duplicate add, a missing delete, or a
    /// failed file operation. Nothing is retried.
    fn execute(
        &self,
        path: &Path,
        command: &Command,
        output: &mut dyn Write,
    ) -> Result<(), CatalogError>;
}

/// Create an execution strategy based on the specified strategy type
pub fn create_strategy(strategy_type: StrategyType) -> Box<dyn ExecutionStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncStrategy),
        StrategyType::Async => Box::new(AsyncStrategy),
    }
}
