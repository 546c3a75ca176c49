use crate::{
    error::RendezvousError,
    shared::usecase::{execute, UseCase},
};
use rendezvous_domain::{Service, ID};
use rendezvous_infra::RendezvousContext;

pub async fn delete_service(
    ctx: &RendezvousContext,
    service_id: ID,
) -> Result<Service, RendezvousError> {
    let usecase = DeleteServiceUseCase { service_id };

    execute(usecase, ctx).await.map_err(RendezvousError::from)
}

/// Removes a `Service` from the catalogue. Services with pending or
/// confirmed bookings are kept.
#[derive(Debug)]
pub struct DeleteServiceUseCase {
    pub service_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    ActiveBookings(ID, usize),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for RendezvousError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The service with id: {} was not found.", id))
            }
            UseCaseError::ActiveBookings(id, count) => Self::Conflict(format!(
                "The service with id: {} still has {} active booking(s).",
                id, count
            )),
            UseCaseError::StorageError(e) => Self::from_storage(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteService";

    async fn execute(&mut self, ctx: &RendezvousContext) -> Result<Self::Response, Self::Error> {
        let active = ctx
            .repos
            .bookings
            .find_by_service(&self.service_id)
            .await
            .into_iter()
            .filter(|b| b.status.is_active())
            .count();
        if active > 0 {
            return Err(UseCaseError::ActiveBookings(self.service_id.clone(), active));
        }

        ctx.repos
            .services
            .delete(&self.service_id)
            .await
            .map_err(UseCaseError::StorageError)?
            .ok_or_else(|| UseCaseError::NotFound(self.service_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::booking::cancel_booking;
    use rendezvous_infra::setup_inmemory_context;

    #[tokio::test]
    async fn it_deletes_service_without_active_bookings() {
        let ctx = setup_inmemory_context().await;
        let service = delete_service(&ctx, "s5".into()).await.unwrap();
        assert_eq!(service.id.as_str(), "s5");
        assert!(ctx.repos.services.find(&"s5".into()).await.is_none());

        let res = delete_service(&ctx, "s5".into()).await;
        assert!(matches!(res, Err(RendezvousError::NotFound(_))));
    }

    #[tokio::test]
    async fn active_bookings_block_delete() {
        let ctx = setup_inmemory_context().await;
        let res = delete_service(&ctx, "s1".into()).await;
        assert!(matches!(res, Err(RendezvousError::Conflict(_))));
        assert!(ctx.repos.services.find(&"s1".into()).await.is_some());

        cancel_booking(&ctx, "b1".into()).await.unwrap();
        assert!(delete_service(&ctx, "s1".into()).await.is_ok());
    }
}
