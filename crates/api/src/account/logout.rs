use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_infra::RendezvousContext;

pub async fn logout(ctx: &RendezvousContext) -> Result<(), RendezvousError> {
    execute(LogoutUseCase {}, ctx)
        .await
        .map_err(RendezvousError::from)
}

#[derive(Debug)]
pub struct LogoutUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LogoutUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "Logout";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .session
            .clear()
            .await
            .map_err(UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::account::login;
    use rendezvous_domain::UserType;
    use rendezvous_infra::setup_inmemory_context;

    #[tokio::test]
    async fn it_clears_session() {
        let ctx = setup_inmemory_context().await;
        login(&ctx, "jean@example.com".into(), UserType::Client)
            .await
            .unwrap();
        logout(&ctx).await.unwrap();
        assert!(ctx.repos.session.get().await.is_none());
        // Signing out twice is fine
        assert!(logout(&ctx).await.is_ok());
    }
}
