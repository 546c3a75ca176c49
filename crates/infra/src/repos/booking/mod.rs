mod stored;

use rendezvous_domain::{Booking, ID};
pub use stored::StoredBookingRepo;

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<()>;
    /// Returns false when there is no `Booking` with the same id
    async fn save(&self, booking: &Booking) -> anyhow::Result<bool>;
    async fn find(&self, booking_id: &ID) -> Option<Booking>;
    async fn find_all(&self) -> Vec<Booking>;
    async fn find_by_client(&self, client_id: &ID) -> Vec<Booking>;
    async fn find_by_provider(&self, provider_id: &ID) -> Vec<Booking>;
    async fn find_by_service(&self, service_id: &ID) -> Vec<Booking>;
}
