mod stored;

use rendezvous_domain::Session;
pub use stored::StoredSessionRepo;

#[async_trait::async_trait]
pub trait ISessionRepo: Send + Sync {
    async fn get(&self) -> Option<Session>;
    async fn set(&self, session: &Session) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
}
