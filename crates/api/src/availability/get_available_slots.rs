use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{availability, date::parse_date, Time, ID};
use rendezvous_infra::RendezvousContext;

/// Whose opening hours to expand
#[derive(Debug, Clone, PartialEq)]
pub enum SlotsFor {
    /// The provider of this `Service`
    Service(ID),
    Provider(ID),
}

pub async fn get_available_slots(
    ctx: &RendezvousContext,
    slots_for: SlotsFor,
    date: String,
) -> Result<Vec<Time>, RendezvousError> {
    let usecase = GetAvailableSlotsUseCase { slots_for, date };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Start times offered to a client on the given date. Existing bookings
/// are not taken into account.
#[derive(Debug)]
pub struct GetAvailableSlotsUseCase {
    pub slots_for: SlotsFor,
    /// `YYYY-MM-DD`
    pub date: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidDate(String),
    ServiceNotFound(ID),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidDate(date) => {
                Self::Validation(format!("The date: {} is not a valid date", date))
            }
            UseCaseError::ServiceNotFound(id) => {
                Self::NotFound(format!("The service with id: {} was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAvailableSlotsUseCase {
    type Response = Vec<Time>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAvailableSlots";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let date = parse_date(&self.date).map_err(|_| UseCaseError::InvalidDate(self.date.clone()))?;

        let provider_id = match &self.slots_for {
            SlotsFor::Provider(provider_id) => provider_id.clone(),
            SlotsFor::Service(service_id) => match ctx.repos.services.find(service_id).await {
                Some(service) => service.provider_id,
                None => return Err(UseCaseError::ServiceNotFound(service_id.clone())),
            },
        };

        let templates = ctx.repos.time_slots.find_by_provider(&provider_id).await;
        Ok(availability::get_available_slots(
            &templates,
            &provider_id,
            &date,
        ))
    }
}
