use super::ISessionRepo;
use crate::kv::IKeyValueStore;
use crate::state::{encode_session, CURRENT_USER_KEY, USER_TYPE_KEY};
use rendezvous_domain::Session;
use std::sync::{Arc, Mutex};

/// Keeps the signed in user under the `currentUser` and `userType` keys.
/// The two keys are always written and removed in the same batch.
pub struct StoredSessionRepo {
    kv: Arc<dyn IKeyValueStore>,
    session: Mutex<Option<Session>>,
}

impl StoredSessionRepo {
    pub fn new(kv: Arc<dyn IKeyValueStore>, session: Option<Session>) -> Self {
        Self {
            kv,
            session: Mutex::new(session),
        }
    }
}

#[async_trait::async_trait]
impl ISessionRepo for StoredSessionRepo {
    async fn get(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    async fn set(&self, session: &Session) -> anyhow::Result<()> {
        self.kv.set_many(encode_session(session)?).await?;
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        self.kv.remove_many(&[CURRENT_USER_KEY, USER_TYPE_KEY]).await?;
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
