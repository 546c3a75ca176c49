use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{Booking, Service, ID};
use rendezvous_infra::RendezvousContext;

pub async fn get_booking(
    ctx: &RendezvousContext,
    booking_id: ID,
) -> Result<BookingDetails, RendezvousError> {
    let usecase = GetBookingUseCase { booking_id };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// A `Booking` with the `Service` it refers to. Bookings of deleted services
/// keep their reference, then `service` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub service: Option<Service>,
}

#[derive(Debug)]
pub struct GetBookingUseCase {
    pub booking_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The booking with id: {} was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingUseCase {
    type Response = BookingDetails;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBooking";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let booking = ctx
            .repos
            .bookings
            .find(&self.booking_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.booking_id.clone()))?;
        let service = ctx.repos.services.find(&booking.service_id).await;

        Ok(BookingDetails { booking, service })
    }
}
