mod inmemory;

pub use inmemory::InMemoryTimeSlotRepo;
use rendezvous_domain::{TimeSlot, ID};

#[async_trait::async_trait]
pub trait ITimeSlotRepo: Send + Sync {
    /// Templates of the provider in insertion order
    async fn find_by_provider(&self, provider_id: &ID) -> Vec<TimeSlot>;
}

#[cfg(test)]
mod tests {
    use crate::setup_inmemory_context;

    #[tokio::test]
    async fn it_finds_seeded_templates_in_order() {
        let ctx = setup_inmemory_context().await;
        let templates = ctx.repos.time_slots.find_by_provider(&"p3".into()).await;
        let days = templates.iter().map(|t| t.day_of_week).collect::<Vec<_>>();
        assert_eq!(days, vec![1, 3, 5]);
        assert!(ctx
            .repos
            .time_slots
            .find_by_provider(&"p9".into())
            .await
            .is_empty());
    }
}
