use super::ITimeSlotRepo;
use crate::repos::shared::inmemory_repo::find_by;
use rendezvous_domain::{TimeSlot, ID};

pub struct InMemoryTimeSlotRepo {
    time_slots: std::sync::Mutex<Vec<TimeSlot>>,
}

impl InMemoryTimeSlotRepo {
    pub fn new(time_slots: Vec<TimeSlot>) -> Self {
        Self {
            time_slots: std::sync::Mutex::new(time_slots),
        }
    }
}

#[async_trait::async_trait]
impl ITimeSlotRepo for InMemoryTimeSlotRepo {
    async fn find_by_provider(&self, provider_id: &ID) -> Vec<TimeSlot> {
        find_by(&self.time_slots, |t| t.provider_id == *provider_id)
    }
}
