use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{InvalidServiceError, Service, ServicePatch, ID};
use rendezvous_infra::RendezvousContext;

pub async fn update_service(
    ctx: &RendezvousContext,
    service_id: ID,
    patch: ServicePatch,
) -> Result<Service, RendezvousError> {
    let usecase = UpdateServiceUseCase { service_id, patch };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

#[derive(Debug)]
pub struct UpdateServiceUseCase {
    pub service_id: ID,
    pub patch: ServicePatch,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidService(InvalidServiceError),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The service with id: {} was not found.", id))
            }
            UseCaseError::InvalidService(e) => Self::Validation(e.to_string()),
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateService";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let mut service = match ctx.repos.services.find(&self.service_id).await {
            Some(service) => service,
            None => return Err(UseCaseError::NotFound(self.service_id.clone())),
        };
        service.apply(self.patch.clone());
        service.validate().map_err(UseCaseError::InvalidService)?;

        let saved = ctx
            .repos
            .services
            .save(&service)
            .await
            .map_err(UseCaseError::StorageError)?;
        if !saved {
            return Err(UseCaseError::NotFound(self.service_id.clone()));
        }

        Ok(service)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rendezvous_infra::setup_inmemory_context;

    #[tokio::test]
    async fn it_merges_patch_over_service() {
        let ctx = setup_inmemory_context().await;
        let patch = ServicePatch {
            price: Some(50.0),
            description: Some("Coupe, shampoing et coiffage".into()),
            ..Default::default()
        };
        let service = update_service(&ctx, "s1".into(), patch).await.unwrap();
        assert_eq!(service.price, 50.0);
        assert_eq!(service.name, "Coupe et Coiffage");
        assert_eq!(service.provider_id.as_str(), "p1");
        assert_eq!(ctx.repos.services.find(&"s1".into()).await, Some(service));
    }

    #[tokio::test]
    async fn invalid_patch_leaves_service_untouched() {
        let ctx = setup_inmemory_context().await;
        let patch = ServicePatch {
            duration: Some(0),
            ..Default::default()
        };
        let res = update_service(&ctx, "s1".into(), patch).await;
        assert!(matches!(res, Err(RendezvousError::Validation(_))));
        assert_eq!(ctx.repos.services.find(&"s1".into()).await.unwrap().duration, 60);

        let res = update_service(&ctx, "s404".into(), Default::default()).await;
        assert!(matches!(res, Err(RendezvousError::NotFound(_))));
    }
}
