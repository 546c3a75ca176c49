use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{Booking, ID};
use rendezvous_infra::RendezvousContext;

pub async fn cancel_booking(
    ctx: &RendezvousContext,
    booking_id: ID,
) -> Result<Booking, RendezvousError> {
    let usecase = CancelBookingUseCase { booking_id };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Cancelling works from every status and cancelling twice is allowed
#[derive(Debug)]
pub struct CancelBookingUseCase {
    pub booking_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The booking with id: {} was not found.", id))
            }
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "CancelBooking";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let mut booking = match ctx.repos.bookings.find(&self.booking_id).await {
            Some(booking) => booking,
            None => return Err(UseCaseError::NotFound(self.booking_id.clone())),
        };
        booking.cancel();

        let saved = ctx
            .repos
            .bookings
            .save(&booking)
            .await
            .map_err(UseCaseError::StorageError)?;
        if !saved {
            return Err(UseCaseError::NotFound(self.booking_id.clone()));
        }

        Ok(booking)
    }
}
