use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::Session;
use rendezvous_infra::RendezvousContext;

/// The signed in user, if any
pub async fn current_session(ctx: &RendezvousContext) -> Result<Option<Session>, RendezvousError> {
    execute(GetSessionUseCase {}, ctx)
        .await
        .map_err(RendezvousError::from)
}

#[derive(Debug)]
pub struct GetSessionUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSessionUseCase {
    type Response = Option<Session>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSession";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.session.get().await)
    }
}
