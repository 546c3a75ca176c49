use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{query, Booking, BookingFilter, ID};
use rendezvous_infra::RendezvousContext;
use serde::Serialize;

pub async fn get_client_bookings(
    ctx: &RendezvousContext,
    client_id: ID,
    filter: BookingFilter,
) -> Result<ClientBookings, RendezvousError> {
    let usecase = GetClientBookingsUseCase { client_id, filter };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Bookings of a client for one tab of the bookings page, together with
/// the size of the `upcoming` and `completed` tabs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientBookings {
    pub bookings: Vec<Booking>,
    pub total_count: usize,
    pub upcoming_count: usize,
    pub completed_count: usize,
}

#[derive(Debug)]
pub struct GetClientBookingsUseCase {
    pub client_id: ID,
    pub filter: BookingFilter,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetClientBookingsUseCase {
    type Response = ClientBookings;

    type Error = UseCaseError;

    const NAME: &'static str = "GetClientBookings";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let bookings = ctx.repos.bookings.find_by_client(&self.client_id).await;

        Ok(ClientBookings {
            total_count: bookings.len(),
            upcoming_count: query::upcoming(&bookings, &now).len(),
            completed_count: query::completed(&bookings).len(),
            bookings: query::filter_bookings(&bookings, self.filter, &now),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::booking::review_booking;
    use rendezvous_infra::{setup_inmemory_context, ISys};
    use std::sync::Arc;

    struct StaticTimeSys {}
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            1_762_164_000_000 // 2025-11-03T10:00:00Z
        }
    }

    fn ids(bookings: &ClientBookings) -> Vec<&str> {
        bookings.bookings.iter().map(|b| b.id.as_str()).collect()
    }

    #[tokio::test]
    async fn it_filters_client_bookings() {
        let mut ctx = setup_inmemory_context().await;
        ctx.sys = Arc::new(StaticTimeSys {});

        let all = get_client_bookings(&ctx, "c1".into(), BookingFilter::All)
            .await
            .unwrap();
        assert_eq!(ids(&all), vec!["b1", "b2", "b3"]);
        assert_eq!(all.upcoming_count, 2);
        assert_eq!(all.completed_count, 1);

        let upcoming = get_client_bookings(&ctx, "c1".into(), BookingFilter::Upcoming)
            .await
            .unwrap();
        assert_eq!(ids(&upcoming), vec!["b1", "b2"]);

        review_booking(&ctx, "b2".into(), 4, "Super".into())
            .await
            .unwrap();
        let completed = get_client_bookings(&ctx, "c1".into(), BookingFilter::Completed)
            .await
            .unwrap();
        assert_eq!(ids(&completed), vec!["b2", "b3"]);
        assert_eq!(completed.upcoming_count, 1);
        assert_eq!(completed.total_count, 3);
    }
}
