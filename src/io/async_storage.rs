//! Asynchronous storage backends
//!
//! [`AsyncFileStorage`] performs the same whole-file reads, writes and
//! appends as [`crate::io::FileStorage`] through `tokio::fs`. It offers no
//! extra guarantees: writes are still direct and unsynchronized.

use crate::core::traits::AsyncStorage;
use crate::io::storage::MemoryStorage;
use crate::types::CatalogError;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Catalog text stored in a file, accessed through tokio
#[derive(Debug, Clone)]
pub struct AsyncFileStorage {
    path: PathBuf,
}

impl AsyncFileStorage {
    /// Create a storage for the file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        AsyncFileStorage {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsyncStorage for AsyncFileStorage {
    async fn read_all(&self) -> Result<String, CatalogError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::io(&self.path, e))
    }

    async fn write_all(&mut self, contents: &str) -> Result<(), CatalogError> {
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| CatalogError::io(&self.path, e))
    }

    async fn append(&mut self, contents: &str) -> Result<(), CatalogError> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| CatalogError::io(&self.path, e))?;

        file.write_all(contents.as_bytes())
            .await
            .map_err(|e| CatalogError::io(&self.path, e))?;

        // tokio files write in the background; flush before the handle drops
        file.flush()
            .await
            .map_err(|e| CatalogError::io(&self.path, e))
    }
}

impl AsyncStorage for MemoryStorage {
    async fn read_all(&self) -> Result<String, CatalogError> {
        Ok(self.contents.clone())
    }

    async fn write_all(&mut self, contents: &str) -> Result<(), CatalogError> {
        self.contents = contents.to_string();
        Ok(())
    }

    async fn append(&mut self, contents: &str) -> Result<(), CatalogError> {
        self.contents.push_str(contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_async_file_storage_read_write_append() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        let mut storage = AsyncFileStorage::new(file.path());

        storage.write_all("1,Lamp,20\n").await.unwrap();
        storage.append("2,Desk,250\n").await.unwrap();

        assert_eq!(
            storage.read_all().await.unwrap(),
            "1,Lamp,20\n2,Desk,250\n"
        );
    }

    #[tokio::test]
    async fn test_async_file_storage_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = AsyncFileStorage::new(dir.path().join("missing.csv"));

        let error = storage.read_all().await.unwrap_err();
        assert_eq!(error.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_async_memory_storage() {
        let mut storage = MemoryStorage::new("a");
        AsyncStorage::append(&mut storage, "b").await.unwrap();
        assert_eq!(AsyncStorage::read_all(&storage).await.unwrap(), "ab");
        AsyncStorage::write_all(&mut storage, "c").await.unwrap();
        assert_eq!(storage.contents(), "c");
    }
}
