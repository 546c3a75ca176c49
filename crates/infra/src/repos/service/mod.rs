mod stored;

use rendezvous_domain::{Service, ID};
pub use stored::StoredServiceRepo;

#[async_trait::async_trait]
pub trait IServiceRepo: Send + Sync {
    async fn insert(&self, service: &Service) -> anyhow::Result<()>;
    /// Returns false when there is no `Service` with the same id
    async fn save(&self, service: &Service) -> anyhow::Result<bool>;
    async fn find(&self, service_id: &ID) -> Option<Service>;
    async fn find_all(&self) -> Vec<Service>;
    async fn find_by_provider(&self, provider_id: &ID) -> Vec<Service>;
    async fn delete(&self, service_id: &ID) -> anyhow::Result<Option<Service>>;
}
