use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{query, Service, ID};
use rendezvous_infra::RendezvousContext;

/// Which part of the catalogue to list
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceQuery {
    All,
    ByProvider(ID),
    /// Exact category match
    ByCategory(String),
    /// Case insensitive match on name, description or category
    Search(String),
    /// Client catalogue: text match on name or description, optionally
    /// narrowed to one category
    Browse {
        text: String,
        category: Option<String>,
    },
}

impl Default for ServiceQuery {
    fn default() -> Self {
        Self::All
    }
}

pub async fn list_services(
    ctx: &RendezvousContext,
    query: ServiceQuery,
) -> Result<Vec<Service>, RendezvousError> {
    let usecase = ListServicesUseCase { query };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

pub async fn search_services(
    ctx: &RendezvousContext,
    text: &str,
) -> Result<Vec<Service>, RendezvousError> {
    list_services(ctx, ServiceQuery::Search(text.to_string())).await
}

#[derive(Debug)]
pub struct ListServicesUseCase {
    pub query: ServiceQuery,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListServicesUseCase {
    type Response = Vec<Service>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListServices";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        if let ServiceQuery::ByProvider(provider_id) = &self.query {
            return Ok(ctx.repos.services.find_by_provider(provider_id).await);
        }

        let services = ctx.repos.services.find_all().await;
        let res = match &self.query {
            ServiceQuery::All | ServiceQuery::ByProvider(_) => services,
            ServiceQuery::ByCategory(category) => query::services_by_category(&services, category),
            ServiceQuery::Search(text) => query::search_services(&services, text),
            ServiceQuery::Browse { text, category } => {
                query::browse_services(&services, text, category.as_deref())
            }
        };
        Ok(res)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rendezvous_infra::setup_inmemory_context;

    fn ids(services: &[Service]) -> Vec<&str> {
        services.iter().map(|s| s.id.as_str()).collect()
    }

    #[tokio::test]
    async fn it_searches_seeded_catalogue() {
        let ctx = setup_inmemory_context().await;
        let res = search_services(&ctx, "Manucure").await.unwrap();
        assert_eq!(ids(&res), vec!["s2"]);

        let res = search_services(&ctx, "santé").await.unwrap();
        assert_eq!(ids(&res), vec!["s3", "s6"]);

        let res = list_services(&ctx, ServiceQuery::ByCategory("Beauté".into()))
            .await
            .unwrap();
        assert_eq!(ids(&res), vec!["s1", "s2", "s5"]);
    }

    #[tokio::test]
    async fn it_browses_by_text_and_category() {
        let ctx = setup_inmemory_context().await;
        let query = ServiceQuery::Browse {
            text: "laser".into(),
            category: Some("Beauté".into()),
        };
        assert_eq!(ids(&list_services(&ctx, query).await.unwrap()), vec!["s5"]);

        let query = ServiceQuery::Browse {
            text: "".into(),
            category: Some("Santé".into()),
        };
        assert_eq!(ids(&list_services(&ctx, query).await.unwrap()), vec!["s3", "s6"]);

        let all = list_services(&ctx, ServiceQuery::default()).await.unwrap();
        assert_eq!(all.len(), 6);
        let own = list_services(&ctx, ServiceQuery::ByProvider("p2".into()))
            .await
            .unwrap();
        assert_eq!(ids(&own), vec!["s3", "s4"]);
    }
}
