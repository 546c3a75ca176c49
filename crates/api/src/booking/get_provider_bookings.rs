use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{query, Booking, ID};
use rendezvous_infra::RendezvousContext;

pub async fn get_provider_bookings(
    ctx: &RendezvousContext,
    provider_id: ID,
    sorted: bool,
) -> Result<Vec<Booking>, RendezvousError> {
    let usecase = GetProviderBookingsUseCase {
        provider_id,
        sorted,
    };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Every `Booking` of a provider in storage order
#[derive(Debug)]
pub struct GetProviderBookingsUseCase {
    pub provider_id: ID,
    /// Earliest first instead
    pub sorted: bool,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProviderBookingsUseCase {
    type Response = Vec<Booking>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetProviderBookings";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let bookings = ctx.repos.bookings.find_by_provider(&self.provider_id).await;
        if self.sorted {
            return Ok(query::sort_by_date(bookings));
        }
        Ok(bookings)
    }
}
