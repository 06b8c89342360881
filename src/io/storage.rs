//! Synchronous storage backends
//!
//! - [`FileStorage`] reads and writes the catalog file with `std::fs`.
//!   Writes go straight to the target path: a failure part way through can
//!   leave a truncated file behind.
//! - [`MemoryStorage`] keeps the catalog text in a `String`.

use crate::core::traits::Storage;
use crate::types::CatalogError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Catalog text stored in a file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage for the file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileStorage {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read_all(&self) -> Result<String, CatalogError> {
        fs::read_to_string(&self.path).map_err(|e| CatalogError::io(&self.path, e))
    }

    fn write_all(&mut self, contents: &str) -> Result<(), CatalogError> {
        fs::write(&self.path, contents).map_err(|e| CatalogError::io(&self.path, e))
    }

    /// Creates the file if it does not exist yet
    fn append(&mut self, contents: &str) -> Result<(), CatalogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CatalogError::io(&self.path, e))?;

        file.write_all(contents.as_bytes())
            .map_err(|e| CatalogError::io(&self.path, e))
    }
}

/// Catalog text held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    pub(crate) contents: String,
}

impl MemoryStorage {
    /// Create a storage holding `contents`
    pub fn new(contents: impl Into<String>) -> Self {
        MemoryStorage {
            contents: contents.into(),
        }
    }

    /// Current catalog text
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Storage for MemoryStorage {
    fn read_all(&self) -> Result<String, CatalogError> {
        Ok(self.contents.clone())
    }

    fn write_all(&mut self, contents: &str) -> Result<(), CatalogError> {
        self.contents = contents.to_string();
        Ok(())
    }

    fn append(&mut self, contents: &str) -> Result<(), CatalogError> {
        self.contents.push_str(contents);
        Ok(())
    }
}
