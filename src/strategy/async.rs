//! Asynchronous execution strategy
//!
//! Runs catalog commands through [`AsyncRecordStore`] on a single-threaded
//! tokio runtime. `tokio::fs` hands the blocking file calls to the
//! runtime's blocking pool, so the store itself never blocks the executor.
//!
//! ```text
//! AsyncStrategy
//!     ├── tokio current-thread runtime
//!     └── AsyncRecordStore
//!         └── AsyncFileStorage (tokio::fs)
//! ```

use crate::cli::Command;
use crate::core::AsyncRecordStore;
use crate::io::csv_format::{write_record_line, write_records};
use crate::strategy::ExecutionStrategy;
use crate::types::CatalogError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Asynchronous execution strategy
///
/// A fresh runtime is built per command; one command performs at most two
/// file operations, so there is nothing to run concurrently.
#[derive(Debug, Clone, Copy)]
pub struct AsyncStrategy;

impl AsyncStrategy {
    async fn run(
        path: &Path,
        command: &Command,
        output: &mut dyn Write,
    ) -> Result<(), CatalogError> {
        let mut store = AsyncRecordStore::open(path);

        match command {
            Command::Init => {
                store.clear().await?;
                info!(path = %path.display(), "initialized catalog");
            }
            Command::Add { id, name, price } => store.add(id, name, *price).await?,
            Command::Get { id } => match store.get(id).await? {
                Some(record) => write_record_line(&record, output)?,
                None => warn!(id = %id, "product not found"),
            },
            Command::Update { id, name, price } => store.update(id, name, *price).await?,
            Command::Delete { id } => store.delete(id).await?,
            Command::List => write_records(&store.list().await?, output)?,
        }

        Ok(())
    }
}

impl ExecutionStrategy for AsyncStrategy {
    fn execute(
        &self,
        path: &Path,
        command: &Command,
        output: &mut dyn Write,
    ) -> Result<(), CatalogError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CatalogError::Runtime {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(Self::run(path, command, output))
    }
}
