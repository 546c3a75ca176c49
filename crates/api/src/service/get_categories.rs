use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::query;
use rendezvous_infra::RendezvousContext;

/// Distinct categories of the catalogue in the order they first appear
pub async fn get_categories(ctx: &RendezvousContext) -> Result<Vec<String>, RendezvousError> {
    execute(GetCategoriesUseCase {}, ctx)
        .await
        .map_err(RendezvousError::from)
}

#[derive(Debug)]
pub struct GetCategoriesUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCategoriesUseCase {
    type Response = Vec<String>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCategories";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let services = ctx.repos.services.find_all().await;
        Ok(query::categories(&services))
    }
}
