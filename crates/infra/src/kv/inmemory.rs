use super::{IKeyValueStore, StoreError};
use std::{collections::HashMap, sync::Mutex};

/// Process local storage, mostly used for testing
pub struct InMemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IKeyValueStore for InMemoryKeyValueStore {
    async fn get_many(&self, keys: &[&str]) -> Result<HashMap<String, String>, StoreError> {
        let values = self.values.lock().unwrap();
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
        let mut values = self.values.lock().unwrap();
        values.extend(entries);
        for key in removed {
            values.remove(*key);
        }
        Ok(())
    }
}
