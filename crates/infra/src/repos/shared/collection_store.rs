use crate::kv::{IKeyValueStore, StoreError};
use rendezvous_domain::{Entity, ID};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })
}

pub fn encode<T: Serialize>(key: &str, items: &[T]) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(|source| StoreError::Serialization {
        key: key.to_string(),
        source,
    })
}

/// Decodes the value read for `key`. A missing value yields `seed`, and so
/// does a corrupt one after a warning. The flag is set when `seed` was used
/// and still has to be written back.
pub fn load<T: DeserializeOwned>(key: &str, raw: Option<String>, seed: Vec<T>) -> (Vec<T>, bool) {
    match raw {
        Some(raw) => match decode(key, &raw) {
            Ok(items) => return (items, false),
            Err(e) => warn!("{}. Falling back to the default dataset.", e),
        },
        None => info!("Seeding `{}` with {} default entries", key, seed.len()),
    }
    (seed, true)
}

/// Ordered list of entities mirrored to a single key of a `IKeyValueStore`.
///
/// Every mutation rewrites the whole stored value. The durable write
/// happens before the in memory list is swapped, so a write that fails or
/// is aborted leaves both untouched. Mutations of one collection run one
/// at a time: `writer` is held from the read until the list is swapped.
pub struct CollectionStore<T> {
    key: &'static str,
    kv: Arc<dyn IKeyValueStore>,
    items: Mutex<Vec<T>>,
    writer: tokio::sync::Mutex<()>,
}

impl<T> CollectionStore<T>
where
    T: Entity + Clone + Serialize + DeserializeOwned + Send + Sync,
{
    /// Wraps items that were already loaded from `kv`
    pub fn new(key: &'static str, kv: Arc<dyn IKeyValueStore>, items: Vec<T>) -> Self {
        Self {
            key,
            kv,
            items: Mutex::new(items),
            writer: tokio::sync::Mutex::new(()),
        }
    }

    pub fn all(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }

    pub fn find(&self, id: &ID) -> Option<T> {
        let items = self.items.lock().unwrap();
        items.iter().find(|item| item.id() == id).cloned()
    }

    pub fn find_by<F: FnMut(&T) -> bool>(&self, mut compare: F) -> Vec<T> {
        let items = self.items.lock().unwrap();
        items.iter().filter(|item| compare(item)).cloned().collect()
    }

    /// Replaces the whole collection
    pub async fn mutate(&self, items: Vec<T>) -> Result<(), StoreError> {
        let _writer = self.writer.lock().await;
        self.write(items).await
    }

    async fn write(&self, items: Vec<T>) -> Result<(), StoreError> {
        let raw = encode(self.key, &items)?;
        self.kv.set(self.key, raw).await?;
        *self.items.lock().unwrap() = items;
        Ok(())
    }

    pub async fn append(&self, item: T) -> Result<(), StoreError> {
        let _writer = self.writer.lock().await;
        let mut items = self.all();
        items.push(item);
        self.write(items).await
    }

    /// Applies `patch` to the item with the given id and returns the updated
    /// item. Nothing is written when the id is unknown.
    pub async fn replace_by_id<F: FnOnce(&mut T)>(
        &self,
        id: &ID,
        patch: F,
    ) -> Result<Option<T>, StoreError> {
        let _writer = self.writer.lock().await;
        let mut items = self.all();
        let updated = match items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                patch(item);
                item.clone()
            }
            None => return Ok(None),
        };
        self.write(items).await?;
        Ok(Some(updated))
    }

    /// Removes the item with the given id and returns it. Nothing is written
    /// when the id is unknown.
    pub async fn remove_by_id(&self, id: &ID) -> Result<Option<T>, StoreError> {
        let _writer = self.writer.lock().await;
        let mut items = self.all();
        let position = match items.iter().position(|item| item.id() == id) {
            Some(position) => position,
            None => return Ok(None),
        };
        let removed = items.remove(position);
        self.write(items).await?;
        Ok(Some(removed))
    }
}
