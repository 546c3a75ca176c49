use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{Service, User, ID};
use rendezvous_infra::RendezvousContext;

pub async fn get_service(
    ctx: &RendezvousContext,
    service_id: ID,
) -> Result<ServiceWithProvider, RendezvousError> {
    let usecase = GetServiceUseCase { service_id };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Looks up the provider offering a `Service`. `None` when the provider is
/// not in the directory.
pub async fn resolve_provider(
    ctx: &RendezvousContext,
    service_id: ID,
) -> Result<Option<User>, RendezvousError> {
    get_service(ctx, service_id).await.map(|res| res.provider)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceWithProvider {
    pub service: Service,
    pub provider: Option<User>,
}

impl ServiceWithProvider {
    /// Name shown next to the service in the catalogue
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.display_name())
    }
}

#[derive(Debug)]
pub struct GetServiceUseCase {
    pub service_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The service with id: {} was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetServiceUseCase {
    type Response = ServiceWithProvider;

    type Error = UseCaseError;

    const NAME: &'static str = "GetService";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let service = match ctx.repos.services.find(&self.service_id).await {
            Some(service) => service,
            None => return Err(UseCaseError::NotFound(self.service_id.clone())),
        };
        let provider = ctx
            .repos
            .users
            .find(&service.provider_id)
            .await
            .filter(|u| u.is_provider());

        Ok(ServiceWithProvider { service, provider })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::{create_service, CreateServiceInput};
    use rendezvous_domain::{User, UserType};
    use rendezvous_infra::setup_inmemory_context;

    #[tokio::test]
    async fn it_resolves_provider_name() {
        let ctx = setup_inmemory_context().await;
        let res = get_service(&ctx, "s3".into()).await.unwrap();
        assert_eq!(res.service.name, "Relaxant");
        assert_eq!(res.provider_name(), Some("Wellness Center"));

        let res = get_service(&ctx, "s404".into()).await;
        assert!(matches!(res, Err(RendezvousError::NotFound(_))));
    }

    #[tokio::test]
    async fn provider_without_business_name_shows_personal_name() {
        let ctx = setup_inmemory_context().await;
        let provider = User::new("Léa Petit".into(), "lea@example.com".into(), UserType::Provider);
        ctx.repos.users.insert(&provider).await.unwrap();
        let service = create_service(
            &ctx,
            CreateServiceInput {
                provider_id: provider.id.clone(),
                name: "Yoga".into(),
                category: "Santé".into(),
                price: 20.0,
                duration: 60,
                description: "Cours particulier".into(),
                image: None,
            },
        )
        .await
        .unwrap();

        let res = get_service(&ctx, service.id.clone()).await.unwrap();
        assert_eq!(res.provider_name(), Some("Léa Petit"));
        let provider = resolve_provider(&ctx, service.id).await.unwrap();
        assert_eq!(provider.map(|p| p.email), Some("lea@example.com".to_string()));
    }
}
