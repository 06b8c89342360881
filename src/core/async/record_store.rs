//! Asynchronous record store
//!
//! Mirrors the synchronous [`crate::core::RecordStore`] operation for
//! operation. The line handling lives in [`crate::core::line_ops`]; this
//! module only sequences the awaited reads and writes around it.

use crate::core::line_ops;
use crate::core::record_store::new_line;
use crate::core::traits::AsyncStorage;
use crate::io::async_storage::AsyncFileStorage;
use crate::types::{CatalogError, Product, Record, RecordKey};
use rust_decimal::Decimal;
use std::path::Path;
use tracing::debug;

/// Product catalog record store with async storage access
#[derive(Debug, Clone)]
pub struct AsyncRecordStore<S: AsyncStorage = AsyncFileStorage> {
    storage: S,
}

impl AsyncRecordStore<AsyncFileStorage> {
    /// Create a store for the catalog file at `path`
    pub fn open(path: impl AsRef<Path>) -> Self {
        AsyncRecordStore::new(AsyncFileStorage::new(path))
    }
}

impl<S: AsyncStorage> AsyncRecordStore<S> {
    /// Create a store over the given storage
    pub fn new(storage: S) -> Self {
        AsyncRecordStore { storage }
    }

    /// The underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a new record, failing with `DuplicateKey` if the id exists
    pub async fn add(
        &mut self,
        id: impl Into<RecordKey>,
        name: &str,
        price: Decimal,
    ) -> Result<(), CatalogError> {
        let key = id.into();
        if self.find(&key).await?.is_some() {
            return Err(CatalogError::duplicate_key(&key));
        }

        let mut line = new_line(&key, name, price)?;
        line.push('\n');
        self.storage.append(&line).await?;

        debug!(id = %key, "added product");
        Ok(())
    }

    /// Find the first record whose id loosely equals `id`
    ///
    /// Returns `Ok(None)` when there is no such record.
    pub async fn get(&self, id: impl Into<RecordKey>) -> Result<Option<Record>, CatalogError> {
        self.find(&id.into()).await
    }

    /// Like [`get`](Self::get), converted to a typed [`Product`]
    pub async fn get_product(
        &self,
        id: impl Into<RecordKey>,
    ) -> Result<Option<Product>, CatalogError> {
        self.get(id).await?.map(Product::try_from).transpose()
    }

    /// Rewrite every record whose id strictly equals `id`; no match is a no-op
    pub async fn update(
        &mut self,
        id: impl Into<RecordKey>,
        name: &str,
        price: Decimal,
    ) -> Result<(), CatalogError> {
        let key = id.into();
        let contents = self.storage.read_all().await?;
        let replacement = new_line(&key, name, price)?;

        let (updated, replaced) = line_ops::rewrite(&contents, &key, &replacement);
        self.storage.write_all(&updated).await?;

        debug!(id = %key, replaced, "updated product");
        Ok(())
    }

    /// Remove the first record whose id loosely equals `id`
    pub async fn delete(&mut self, id: impl Into<RecordKey>) -> Result<(), CatalogError> {
        let key = id.into();
        let contents = self.storage.read_all().await?;

        let remaining =
            line_ops::remove(&contents, &key).ok_or_else(|| CatalogError::not_found(&key))?;
        self.storage.write_all(&remaining).await?;

        debug!(id = %key, "deleted product");
        Ok(())
    }

    /// All records in file order, skipping empty lines
    pub async fn list(&self) -> Result<Vec<Record>, CatalogError> {
        let contents = self.storage.read_all().await?;
        Ok(line_ops::records(&contents))
    }

    /// Remove every record, leaving empty contents
    pub async fn clear(&mut self) -> Result<(), CatalogError> {
        self.storage.write_all("").await?;
        debug!("cleared catalog");
        Ok(())
    }

    async fn find(&self, key: &RecordKey) -> Result<Option<Record>, CatalogError> {
        let contents = self.storage.read_all().await?;
        Ok(line_ops::lookup(&contents, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStorage;
    use tempfile::NamedTempFile;

    fn memory_store() -> AsyncRecordStore<MemoryStorage> {
        AsyncRecordStore::new(MemoryStorage::new("1,Lamp,20\n2,Desk,250\n"))
    }

    #[tokio::test]
    async fn test_add_and_duplicate() {
        let mut store = memory_store();

        store.add("3", "Chair", Decimal::from(80)).await.unwrap();
        let duplicate = store.add(3, "Chair again", Decimal::from(90)).await;

        assert!(matches!(duplicate, Err(CatalogError::DuplicateKey { ref id }) if id == "3"));
        assert_eq!(
            store.storage().contents(),
            "1,Lamp,20\n2,Desk,250\n3,Chair,80\n"
        );
    }

    #[tokio::test]
    async fn test_add_empty_id_to_empty_store() {
        let mut store = AsyncRecordStore::new(MemoryStorage::default());

        assert_eq!(store.get("").await.unwrap(), None);
        store.add("", "x", Decimal::ONE).await.unwrap();

        assert_eq!(store.storage().contents(), ",x,1\n");
    }

    #[tokio::test]
    async fn test_get_and_get_product() {
        let store = memory_store();

        assert_eq!(
            store.get("2").await.unwrap(),
            Some(Record::new("2", "Desk", "250"))
        );
        assert_eq!(store.get("9").await.unwrap(), None);

        let product = store.get_product(1).await.unwrap().unwrap();
        assert_eq!(product.price, Decimal::from(20));
    }

    #[tokio::test]
    async fn test_update_strict_match() {
        let mut store = memory_store();

        store.update(2, "Ignored", Decimal::ONE).await.unwrap();
        assert_eq!(store.storage().contents(), "1,Lamp,20\n2,Desk,250\n");

        store.update("2", "Table", Decimal::from(300)).await.unwrap();
        assert_eq!(store.storage().contents(), "1,Lamp,20\n2,Table,300\n");
    }

    #[tokio::test]
    async fn test_delete_then_not_found() {
        let mut store = memory_store();

        store.delete("1").await.unwrap();
        assert_eq!(store.storage().contents(), "2,Desk,250\n");

        let again = store.delete("1").await;
        assert!(matches!(again, Err(CatalogError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_and_clear() {
        let mut store = memory_store();

        assert_eq!(store.list().await.unwrap().len(), 2);
        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_store_matches_sync_output() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        let mut store = AsyncRecordStore::open(file.path());

        store.add("1", "Product 1", Decimal::from(100)).await.unwrap();
        store.add("2", "Product 2", Decimal::from(200)).await.unwrap();
        store.update("1", "Product 1b", Decimal::from(150)).await.unwrap();
        store.delete("2").await.unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "1,Product 1b,150\n");
    }
}
