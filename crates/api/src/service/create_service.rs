use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{InvalidServiceError, Service, ID};
use rendezvous_infra::RendezvousContext;

#[derive(Debug, Clone)]
pub struct CreateServiceInput {
    pub provider_id: ID,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Minutes
    pub duration: u32,
    pub description: String,
    pub image: Option<String>,
}

pub async fn create_service(
    ctx: &RendezvousContext,
    input: CreateServiceInput,
) -> Result<Service, RendezvousError> {
    let usecase = CreateServiceUseCase { input };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

#[derive(Debug)]
pub struct CreateServiceUseCase {
    pub input: CreateServiceInput,
}

#[derive(Debug)]
pub enum UseCaseError {
    ProviderNotFound(ID),
    InvalidService(InvalidServiceError),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ProviderNotFound(id) => {
                Self::NotFound(format!("The provider with id: {} was not found.", id))
            }
            UseCaseError::InvalidService(e) => Self::Validation(e.to_string()),
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateService";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let provider = ctx.repos.users.find(&self.input.provider_id).await;
        if !provider.map(|p| p.is_provider()).unwrap_or(false) {
            return Err(UseCaseError::ProviderNotFound(
                self.input.provider_id.clone(),
            ));
        }

        let input = self.input.clone();
        let mut service = Service::new(
            input.provider_id,
            input.name,
            input.category,
            input.price,
            input.duration,
            input.description,
        )
        .map_err(UseCaseError::InvalidService)?;
        if let Some(image) = input.image.filter(|i| !i.trim().is_empty()) {
            service.image = image;
        }

        ctx.repos
            .services
            .insert(&service)
            .await
            .map_err(UseCaseError::StorageError)?;

        Ok(service)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rendezvous_domain::DEFAULT_SERVICE_IMAGE;
    use rendezvous_infra::setup_inmemory_context;

    fn input(provider_id: &str) -> CreateServiceInput {
        CreateServiceInput {
            provider_id: provider_id.into(),
            name: "Brushing".into(),
            category: "Beauté".into(),
            price: 25.0,
            duration: 30,
            description: "Brushing et mise en forme".into(),
            image: None,
        }
    }

    #[tokio::test]
    async fn it_adds_service_to_catalogue() {
        let ctx = setup_inmemory_context().await;
        let service = create_service(&ctx, input("p1")).await.unwrap();

        assert!(service.id.as_str().starts_with('s'));
        assert_eq!(service.rating, 0.0);
        assert_eq!(service.reviews, 0);
        assert_eq!(service.image, DEFAULT_SERVICE_IMAGE);
        assert_eq!(ctx.repos.services.find_by_provider(&"p1".into()).await.len(), 3);
    }

    #[tokio::test]
    async fn it_rejects_invalid_services() {
        let ctx = setup_inmemory_context().await;
        let mut free = input("p1");
        free.price = 0.0;
        let res = create_service(&ctx, free).await;
        assert!(matches!(res, Err(RendezvousError::Validation(_))));

        let mut unnamed = input("p1");
        unnamed.name = " ".into();
        let res = create_service(&ctx, unnamed).await;
        assert!(matches!(res, Err(RendezvousError::Validation(_))));

        assert_eq!(ctx.repos.services.find_all().await.len(), 6);
    }

    #[tokio::test]
    async fn only_providers_own_services() {
        let ctx = setup_inmemory_context().await;
        let res = create_service(&ctx, input("c1")).await;
        assert!(matches!(res, Err(RendezvousError::NotFound(_))));
        let res = create_service(&ctx, input("p404")).await;
        assert!(matches!(res, Err(RendezvousError::NotFound(_))));
    }
}
