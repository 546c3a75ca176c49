use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{Booking, Rating, ID};
use rendezvous_infra::RendezvousContext;

pub async fn review_booking(
    ctx: &RendezvousContext,
    booking_id: ID,
    rating: u8,
    review: String,
) -> Result<Booking, RendezvousError> {
    let usecase = ReviewBookingUseCase {
        booking_id,
        rating,
        review,
    };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Attaches the client's rating and review and completes the `Booking`
#[derive(Debug)]
pub struct ReviewBookingUseCase {
    pub booking_id: ID,
    pub rating: u8,
    pub review: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidRating(u8),
    NotFound(ID),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidRating(rating) => Self::Validation(format!(
                "The rating: {} is not valid, it must be between 1 and 5",
                rating
            )),
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The booking with id: {} was not found.", id))
            }
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ReviewBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "ReviewBooking";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let rating = Rating::new(self.rating).map_err(|_| UseCaseError::InvalidRating(self.rating))?;

        let mut booking = match ctx.repos.bookings.find(&self.booking_id).await {
            Some(booking) => booking,
            None => return Err(UseCaseError::NotFound(self.booking_id.clone())),
        };
        booking.attach_review(rating, std::mem::take(&mut self.review));

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
