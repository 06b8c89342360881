//! Record store over a catalog file
//!
//! This module provides the RecordStore component that implements add, get,
//! update and delete against the catalog text held by a [`Storage`].
//!
//! # Read-Modify-Write
//!
//! Nothing is cached between calls. Every operation reads the full contents,
//! and mutating operations write the full contents back (or append, for
//! `add`). There is no locking and writes are not atomic: the store assumes
//! it is the only writer.
//!
//! # Matching
//!
//! `get`, `delete` and the duplicate check of `add` compare ids loosely;
//! `update` compares them strictly. See [`RecordKey`] for the difference.

use crate::core::line_ops;
use crate::core::traits::Storage;
use crate::io::csv_format::{encode_line, format_price};
use crate::io::storage::FileStorage;
use crate::types::{CatalogError, Product, Record, RecordKey};
use rust_decimal::Decimal;
use std::path::Path;
use tracing::debug;

/// Product catalog record store
///
/// # Examples
///
/// ```no_run
/// use product_catalog::RecordStore;
/// use rust_decimal::Decimal;
///
/// let mut store = RecordStore::open("products.csv");
/// store.add("1", "Product 1", Decimal::from(100)).unwrap();
/// let record = store.get("1").unwrap();
/// println!("{:?}", record);
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore<S: Storage = FileStorage> {
    storage: S,
}

impl RecordStore<FileStorage> {
    /// Create a store for the catalog file at `path`
    ///
    /// The file is not touched until the first operation.
    pub fn open(path: impl AsRef<Path>) -> Self {
        RecordStore::new(FileStorage::new(path))
    }
}

impl<S: Storage> RecordStore<S> {
    /// Create a store over the given storage
    pub fn new(storage: S) -> Self {
        RecordStore { storage }
    }

    /// The underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning its storage
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Append a new record
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if a record with a loosely equal id exists.
    /// The name and price are not checked for commas or newlines.
    pub fn add(
        &mut self,
        id: impl Into<RecordKey>,
        name: &str,
        price: Decimal,
    ) -> Result<(), CatalogError> {
        let key = id.into();
        if self.find(&key)?.is_some() {
            return Err(CatalogError::duplicate_key(&key));
        }

        let mut line = new_line(&key, name, price)?;
        line.push('\n');
        self.storage.append(&line)?;

        debug!(id = %key, "added product");
        Ok(())
    }

    /// Find the first record whose id loosely equals `id`
    ///
    /// Returns `Ok(None)` when there is no such record.
    pub fn get(&self, id: impl Into<RecordKey>) -> Result<Option<Record>, CatalogError> {
        self.find(&id.into())
    }

    /// Like [`get`](Self::get), converted to a typed [`Product`]
    pub fn get_product(&self, id: impl Into<RecordKey>) -> Result<Option<Product>, CatalogError> {
        self.get(id)?.map(Product::try_from).transpose()
    }

    /// Replace name and price of every record whose id strictly equals `id`
    ///
    /// Records keep their position. When nothing matches, the contents are
    /// written back unchanged and no error is returned.
    pub fn update(
        &mut self,
        id: impl Into<RecordKey>,
        name: &str,
        price: Decimal,
    ) -> Result<(), CatalogError> {
        let key = id.into();
        let contents = self.storage.read_all()?;
        let replacement = new_line(&key, name, price)?;

        let (updated, replaced) = line_ops::rewrite(&contents, &key, &replacement);
        self.storage.write_all(&updated)?;

        debug!(id = %key, replaced, "updated product");
        Ok(())
    }

    /// Remove the first record whose id loosely equals `id`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such record; the contents are left
    /// untouched in that case.
    pub fn delete(&mut self, id: impl Into<RecordKey>) -> Result<(), CatalogError> {
        let key = id.into();
        let contents = self.storage.read_all()?;

        let remaining =
            line_ops::remove(&contents, &key).ok_or_else(|| CatalogError::not_found(&key))?;
        self.storage.write_all(&remaining)?;

        debug!(id = %key, "deleted product");
        Ok(())
    }

    /// All records in file order, skipping empty lines
    pub fn list(&self) -> Result<Vec<Record>, CatalogError> {
        let contents = self.storage.read_all()?;
        Ok(line_ops::records(&contents))
    }

    /// Remove every record, leaving empty contents
    pub fn clear(&mut self) -> Result<(), CatalogError> {
        self.storage.write_all("")?;
        debug!("cleared catalog");
        Ok(())
    }

    fn find(&self, key: &RecordKey) -> Result<Option<Record>, CatalogError> {
        let contents = self.storage.read_all()?;
        Ok(line_ops::lookup(&contents, key))
    }
}

/// Encode `key,name,price` as a catalog line
pub(crate) fn new_line(key: &RecordKey, name: &str, price: Decimal) -> Result<String, CatalogError> {
    let id = key.to_string();
    let price = format_price(price);
    encode_line(&[&id, name, &price])
}
