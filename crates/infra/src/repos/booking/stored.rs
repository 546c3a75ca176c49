use super::IBookingRepo;
use crate::repos::shared::collection_store::CollectionStore;
use rendezvous_domain::{query, Booking, ID};

pub struct StoredBookingRepo {
    bookings: CollectionStore<Booking>,
}

impl StoredBookingRepo {
    pub fn new(bookings: CollectionStore<Booking>) -> Self {
        Self { bookings }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for StoredBookingRepo {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<()> {
        self.bookings.append(booking.clone()).await?;
        Ok(())
    }

    async fn save(&self, booking: &Booking) -> anyhow::Result<bool> {
        let res = self
            .bookings
            .replace_by_id(&booking.id, |b| *b = booking.clone())
            .await?;
        Ok(res.is_some())
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        self.bookings.find(booking_id)
    }

    async fn find_all(&self) -> Vec<Booking> {
        self.bookings.all()
    }

    async fn find_by_client(&self, client_id: &ID) -> Vec<Booking> {
        query::bookings_by_client(&self.bookings.all(), client_id)
    }

    async fn find_by_provider(&self, provider_id: &ID) -> Vec<Booking> {
        query::bookings_by_provider(&self.bookings.all(), provider_id)
    }

    async fn find_by_service(&self, service_id: &ID) -> Vec<Booking> {
        self.bookings.find_by(|b| b.service_id == *service_id)
    }
}
