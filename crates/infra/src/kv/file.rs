use super::{IKeyValueStore, StoreError};
use std::{
    collections::{BTreeMap, HashMap},
    path::PathBuf,
};
use tokio::sync::Mutex;
use tracing::info;

/// Stores every key in one JSON document on disk.
///
/// The document is rewritten on each write through a temporary file that
/// is renamed over the previous version, so readers never observe a half
/// written batch. The lock on `values` is held for the whole write, so
/// batches never interleave and memory only changes once the rename is done.
pub struct FileKeyValueStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        let values = match tokio::fs::read(&path).await {
            Ok(content) => {
                serde_json::from_slice(&content).map_err(|source| StoreError::Corrupt {
                    key: path.display().to_string(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No storage found at {}, starting empty", path.display());
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    async fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let content =
            serde_json::to_vec_pretty(values).map_err(|source| StoreError::Serialization {
                key: self.path.display().to_string(),
                source,
            })?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl IKeyValueStore for FileKeyValueStore {
    async fn get_many(&self, keys: &[&str]) -> Result<HashMap<String, String>, StoreError> {
        let values = self.values.lock().await;
        Ok(keys
            .iter()
            .filter_map(|key| values.get(*key).map(|v| (key.to_string(), v.clone())))
            .collect())
    }

    async fn write_batch(
        &self,
        entries: Vec<(String, String)>,
        removed: &[&str],
    ) -> Result<(), StoreError> {
        let mut values = self.values.lock().await;
        let mut next = values.clone();
        next.extend(entries);
        for key in removed {
            next.remove(*key);
        }
        self.persist(&next).await?;
        *values = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let store = FileKeyValueStore::open(path.clone()).await.unwrap();
        store.set("services", "[]".into()).await.unwrap();
        drop(store);

        let store = FileKeyValueStore::open(path).await.unwrap();
        assert_eq!(store.get("services").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn concurrent_writes_keep_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileKeyValueStore::open(path.clone()).await.unwrap();

        let writes = (0..20)
            .map(|i| store.set_many(vec![(format!("key{}", i), i.to_string())]))
            .collect::<Vec<_>>();
        let results = futures::future::join_all(writes).await;
        assert!(results.iter().all(|res| res.is_ok()));

        let (bookings, services) = tokio::join!(
            store.set("bookings", "[]".into()),
            store.set("services", "[]".into())
        );
        assert!(bookings.is_ok() && services.is_ok());

        let mut keys = vec!["bookings".to_string(), "services".to_string()];
        keys.extend((0..20).map(|i| format!("key{}", i)));
        let keys = keys.iter().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(store.get_many(&keys).await.unwrap().len(), 22);

        drop(store);
        let reopened = FileKeyValueStore::open(path).await.unwrap();
        assert_eq!(reopened.get_many(&keys).await.unwrap().len(), 22);
    }

    #[tokio::test]
    async fn it_rejects_corrupt_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        tokio::fs::write(&path, "not json").await.unwrap();
        assert!(matches!(
            FileKeyValueStore::open(path).await,
            Err(StoreError::Corrupt { .. })
        ));
    }
}
