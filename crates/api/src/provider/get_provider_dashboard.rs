use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{query, Booking, ProviderStats, ID};
use rendezvous_infra::RendezvousContext;
use serde::Serialize;

pub async fn get_provider_dashboard(
    ctx: &RendezvousContext,
    provider_id: ID,
) -> Result<ProviderDashboard, RendezvousError> {
    let usecase = GetProviderDashboardUseCase { provider_id };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

pub async fn get_provider_stats(
    ctx: &RendezvousContext,
    provider_id: ID,
) -> Result<ProviderStats, RendezvousError> {
    get_provider_dashboard(ctx, provider_id)
        .await
        .map(|dashboard| dashboard.stats)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDashboard {
    pub stats: ProviderStats,
    /// Next confirmed bookings, earliest first
    pub upcoming: Vec<Booking>,
}

#[derive(Debug)]
pub struct GetProviderDashboardUseCase {
    pub provider_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The provider with id: {} was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProviderDashboardUseCase {
    type Response = ProviderDashboard;

    type Error = UseCaseError;

    const NAME: &'static str = "GetProviderDashboard";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.users.find(&self.provider_id).await {
            Some(user) if user.is_provider() => (),
            _ => return Err(UseCaseError::NotFound(self.provider_id.clone())),
        }

        let services = ctx.repos.services.find_by_provider(&self.provider_id).await;
        let bookings = ctx.repos.bookings.find_by_provider(&self.provider_id).await;
        let now = ctx.sys.now();

        Ok(ProviderDashboard {
            stats: query::provider_stats(&self.provider_id, &services, &bookings, &now.date()),
            upcoming: query::dashboard_upcoming(
                &bookings,
                &now,
                ctx.config.dashboard_upcoming_limit,
            ),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::booking::{create_booking, review_booking};
    use rendezvous_domain::AverageRating;
    use rendezvous_infra::{setup_inmemory_context, ISys};
    use std::sync::Arc;

    struct StaticTimeSys {}
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            1_762_164_000_000 // 2025-11-03T10:00:00Z
        }
    }

    async fn setup() -> RendezvousContext {
        let mut ctx = setup_inmemory_context().await;
        ctx.sys = Arc::new(StaticTimeSys {});
        ctx
    }

    #[tokio::test]
    async fn provider_without_reviews_has_no_average() {
        let ctx = setup().await;
        let stats = get_provider_stats(&ctx, "p1".into()).await.unwrap();
        assert_eq!(stats.total_services, 2);
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.today_bookings, 2);
        assert_eq!(stats.confirmed_bookings, 2);
        assert_eq!(stats.completed_bookings, 0);
        assert_eq!(stats.average_rating, AverageRating::NotAvailable);
        assert_eq!(stats.average_rating.to_string(), "N/A");
    }

    #[tokio::test]
    async fn average_rating_has_one_decimal() {
        let ctx = setup().await;
        review_booking(&ctx, "b4".into(), 4, "Bien".into())
            .await
            .unwrap();
        let stats = get_provider_stats(&ctx, "p2".into()).await.unwrap();
        assert_eq!(stats.completed_bookings, 2);
        assert_eq!(stats.average_rating.to_string(), "4.5");
    }

    #[tokio::test]
    async fn dashboard_lists_next_bookings() {
        let mut ctx = setup().await;
        ctx.config.dashboard_upcoming_limit = 2;
        for date in ["2025-12-01", "2025-11-04"].iter() {
            create_booking(
                &ctx,
                "c2".into(),
                "s1".into(),
                date.to_string(),
                "09:30".into(),
                None,
            )
            .await
            .unwrap();
        }

        let dashboard = get_provider_dashboard(&ctx, "p1".into()).await.unwrap();
        let dates = dashboard
            .upcoming
            .iter()
            .map(|b| b.date.to_string())
            .collect::<Vec<_>>();
        assert_eq!(dates, vec!["2025-11-04", "2025-11-15"]);
        assert_eq!(dashboard.stats.total_bookings, 4);

        let res = get_provider_dashboard(&ctx, "c1".into()).await;
        assert!(matches!(res, Err(RendezvousError::NotFound(_))));
    }
}
