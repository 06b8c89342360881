//! Synchronous execution strategy
//!
//! Runs catalog commands through [`RecordStore`] with blocking `std::fs`
//! access. Output formatting is delegated to the `csv_format` module.

use crate::cli::Command;
use crate::core::RecordStore;
use crate::io::csv_format::{write_record_line, write_records};
use crate::strategy::ExecutionStrategy;
use crate::types::CatalogError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Synchronous execution strategy
///
/// # Examples
///
/// ```no_run
/// use product_catalog::cli::Command;
/// use product_catalog::strategy::{ExecutionStrategy, SyncStrategy};
/// use std::path::Path;
///
/// let mut output = std::io::stdout();
/// SyncStrategy
///     .execute(Path::new("products.csv"), &Command::List, &mut output)
///     .expect("Listing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncStrategy;

impl ExecutionStrategy for SyncStrategy {
    fn execute(
        &self,
        path: &Path,
        command: &Command,
        output: &mut dyn Write,
    ) -> Result<(), CatalogError> {
        let mut store = RecordStore::open(path);

        match command {
            Command::Init => {
                store.clear()?;
                info!(path = %path.display(), "initialized catalog");
            }
            Command::Add { id, name, price } => store.add(id, name, *price)?,
            Command::Get { id } => match store.get(id)? {
                Some(record) => write_record_line(&record, output)?,
                None => warn!(id = %id, "product not found"),
            },
            Command::Update { id, name, price } => store.update(id, name, *price)?,
            Command::Delete { id } => store.delete(id)?,
            Command::List => write_records(&store.list()?, output)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary catalog file for testing
    fn create_temp_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run(path: &Path, command: Command) -> Result<String, CatalogError> {
        let mut output = Vec::new();
        SyncStrategy.execute(path, &command, &mut output)?;
        Ok(String::from_utf8(output).expect("Output is not UTF-8"))
    }

    #[test]
    fn test_get_prints_raw_line() {
        let file = create_temp_catalog("1,Lamp,20\n");
        let output = run(file.path(), Command::Get { id: "1".to_string() }).unwrap();
        assert_eq!(output, "1,Lamp,20\n");
    }

    #[test]
    fn test_get_missing_prints_nothing() {
        let file = create_temp_catalog("1,Lamp,20\n");
        let output = run(file.path(), Command::Get { id: "2".to_string() }).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_add_then_list() {
        let file = create_temp_catalog("");
        let add = Command::Add {
            id: "1".to_string(),
            name: "Lamp".to_string(),
            price: Decimal::from(20),
        };

        assert_eq!(run(file.path(), add).unwrap(), "");
        assert_eq!(
            run(file.path(), Command::List).unwrap(),
            "id,name,price\n1,Lamp,20\n"
        );
    }

    #[test]
    fn test_init_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");

        run(&path, Command::Init).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_delete_missing_is_error() {
        let file = create_temp_catalog("1,Lamp,20\n");
        let result = run(file.path(), Command::Delete { id: "2".to_string() });
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&dir.path().join("missing.csv"), Command::List);
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
