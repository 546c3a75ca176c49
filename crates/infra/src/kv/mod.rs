mod file;
mod inmemory;

pub use file::FileKeyValueStore;
pub use inmemory::InMemoryKeyValueStore;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Stored value under `{key}` is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unable to serialize value for `{key}`: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable string key to string value storage.
///
/// Every batch is applied as a whole or not at all, and batches are applied
/// one after the other.
#[async_trait::async_trait]
pub trait IKeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut values = self.get_many(&[key]).await?;
        Ok(values.remove(key))
    }
    /// Missing keys are left out of the result
    async fn get_many(&self, keys: &[&str]) -> Result<HashMap<String, String>, StoreError>;
    /// Writes `entries` and removes `removed` in a single batch
    async fn write_batch(
        &self,
        entries: Vec<(String, String)>,
        removed: &[&str],
    ) -> Result<(), StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.write_batch(vec![(key.to_string(), value)], &[]).await
    }
    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), StoreError> {
        self.write_batch(entries, &[]).await
    }
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StoreError> {
        self.write_batch(Vec::new(), keys).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    async fn stores() -> Vec<(Arc<dyn IKeyValueStore>, tempfile::TempDir)> {
        let dir = tempfile::tempdir().expect("To create temp dir");
        let file_store = FileKeyValueStore::open(dir.path().join("storage.json"))
            .await
            .expect("To open file store");
        vec![
            (
                Arc::new(InMemoryKeyValueStore::new()) as Arc<dyn IKeyValueStore>,
                tempfile::tempdir().expect("To create temp dir"),
            ),
            (Arc::new(file_store), dir),
        ]
    }

    #[tokio::test]
    async fn set_get_and_remove() {
        for (store, _dir) in stores().await {
            assert!(store.get("bookings").await.unwrap().is_none());
            store.set("bookings", "[]".into()).await.unwrap();
            assert_eq!(store.get("bookings").await.unwrap().as_deref(), Some("[]"));

            store
                .set_many(vec![
                    ("currentUser".into(), "{}".into()),
                    ("userType".into(), "\"client\"".into()),
                ])
                .await
                .unwrap();
            let values = store
                .get_many(&["currentUser", "userType", "services"])
                .await
                .unwrap();
            assert_eq!(values.len(), 2);

            store.remove_many(&["currentUser", "userType"]).await.unwrap();
            assert!(store.get("currentUser").await.unwrap().is_none());
            assert!(store.get("bookings").await.unwrap().is_some());

            store
                .write_batch(vec![("services".into(), "[]".into())], &["bookings"])
                .await
                .unwrap();
            let values = store.get_many(&["services", "bookings"]).await.unwrap();
            assert_eq!(values.len(), 1);
            assert_eq!(values.get("services").map(String::as_str), Some("[]"));
        }
    }
}
