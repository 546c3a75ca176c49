use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{Booking, BookingStatus, ID};
use rendezvous_infra::RendezvousContext;

pub async fn update_booking_status(
    ctx: &RendezvousContext,
    booking_id: ID,
    status: BookingStatus,
) -> Result<Booking, RendezvousError> {
    let usecase = UpdateBookingStatusUseCase { booking_id, status };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Used by providers to confirm or complete a `Booking`. Any status can be
/// set from any other status.
#[derive(Debug)]
pub struct UpdateBookingStatusUseCase {
    pub booking_id: ID,
    pub status: BookingStatus,
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
impl UseCase for UpdateBookingStatusUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateBookingStatus";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let mut booking = match ctx.repos.bookings.find(&self.booking_id).await {
            Some(booking) => booking,
            None => return Err(UseCaseError::NotFound(self.booking_id.clone())),
        };
        booking.set_status(self.status);

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

#[cfg(test)]
mod test {
    use super::*;
    use rendezvous_infra::setup_inmemory_context;

    #[tokio::test]
    async fn provider_completes_booking() {
        let ctx = setup_inmemory_context().await;
        let booking = update_booking_status(&ctx, "b4".into(), BookingStatus::Completed)
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Completed);
        assert_eq!(booking.rating, None);

        let stored = ctx.repos.bookings.find(&"b4".into()).await.unwrap();
        assert_eq!(stored.status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn unknown_booking_is_not_found() {
        let ctx = setup_inmemory_context().await;
        let res = update_booking_status(&ctx, "b404".into(), BookingStatus::Pending).await;
        assert!(matches!(res, Err(RendezvousError::NotFound(_))));
    }
}
