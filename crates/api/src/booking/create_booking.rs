use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{date::parse_date, Booking, Time, ID};
use rendezvous_infra::RendezvousContext;
use tracing::info;

pub async fn create_booking(
    ctx: &RendezvousContext,
    client_id: ID,
    service_id: ID,
    date: String,
    time: String,
    notes: Option<String>,
) -> Result<Booking, RendezvousError> {
    let usecase = CreateBookingUseCase {
        client_id,
        service_id,
        date,
        time,
        notes,
    };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Books a `Service` for a client. The new `Booking` is stored once the
/// configured confirmation delay has passed, so aborting the use case
/// before that leaves the store untouched.
#[derive(Debug)]
pub struct CreateBookingUseCase {
    pub client_id: ID,
    pub service_id: ID,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:mm`
    pub time: String,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingDate,
    MissingTime,
    InvalidDate(String),
    InvalidTime(String),
    ServiceNotFound(ID),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingDate => Self::Validation("A date must be selected".into()),
            UseCaseError::MissingTime => Self::Validation("A time must be selected".into()),
            UseCaseError::InvalidDate(date) => {
                Self::Validation(format!("The date: {} is not a valid date", date))
            }
            UseCaseError::InvalidTime(time) => {
                Self::Validation(format!("The time: {} is not a valid time", time))
            }
            UseCaseError::ServiceNotFound(id) => {
                Self::NotFound(format!("The service with id: {} was not found.", id))
            }
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateBooking";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(UseCaseError::MissingDate);
        }
        let time = self.time.trim();
        if time.is_empty() {
            return Err(UseCaseError::MissingTime);
        }
        let date = parse_date(date).map_err(|_| UseCaseError::InvalidDate(self.date.clone()))?;
        let time = time
            .parse::<Time>()
            .map_err(|_| UseCaseError::InvalidTime(self.time.clone()))?;

        let mut service = ctx
            .repos
            .services
            .find(&self.service_id)
            .await
            .ok_or_else(|| UseCaseError::ServiceNotFound(self.service_id.clone()))?;

        let delay = ctx.config.booking_confirmation_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
            // The service can be deleted while waiting
            service = ctx
                .repos
                .services
                .find(&self.service_id)
                .await
                .ok_or_else(|| UseCaseError::ServiceNotFound(self.service_id.clone()))?;
        }

        let booking = Booking::new(
            self.client_id.clone(),
            service.id,
            service.provider_id,
            date,
            time,
            self.notes.take(),
        );
        ctx.repos
            .bookings
            .insert(&booking)
            .await
            .map_err(UseCaseError::StorageError)?;
        info!("Booking {} confirmed for client {}", booking.id, booking.client_id);

        Ok(booking)
    }
}
