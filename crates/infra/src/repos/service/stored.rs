use super::IServiceRepo;
use crate::repos::shared::collection_store::CollectionStore;
use rendezvous_domain::{query, Service, ID};

pub struct StoredServiceRepo {
    services: CollectionStore<Service>,
}

impl StoredServiceRepo {
    pub fn new(services: CollectionStore<Service>) -> Self {
        Self { services }
    }
}

#[async_trait::async_trait]
impl IServiceRepo for StoredServiceRepo {
    async fn insert(&self, service: &Service) -> anyhow::Result<()> {
        self.services.append(service.clone()).await?;
        Ok(())
    }

    async fn save(&self, service: &Service) -> anyhow::Result<bool> {
        let res = self
            .services
            .replace_by_id(&service.id, |s| *s = service.clone())
            .await?;
        Ok(res.is_some())
    }

    async fn find(&self, service_id: &ID) -> Option<Service> {
        self.services.find(service_id)
    }

    async fn find_all(&self) -> Vec<Service> {
        self.services.all()
    }

    async fn find_by_provider(&self, provider_id: &ID) -> Vec<Service> {
        query::services_by_provider(&self.services.all(), provider_id)
    }

    async fn delete(&self, service_id: &ID) -> anyhow::Result<Option<Service>> {
        Ok(self.services.remove_by_id(service_id).await?)
    }
}
