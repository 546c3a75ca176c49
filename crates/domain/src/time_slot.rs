use crate::{
    shared::entity::{Entity, ID},
    time::Time,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recurring weekly opening window of a provider.
///
/// A `TimeSlot` is a template and not a bookable instant, it generates
/// bookable start times on every date falling on `day_of_week`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: ID,
    pub provider_id: ID,
    /// 0 is Sunday, 6 is Saturday
    pub day_of_week: u8,
    pub start_time: Time,
    pub end_time: Time,
    pub is_available: bool,
}

#[derive(Error, Debug, PartialEq)]
pub enum TimeSlotError {
    #[error("Day of week must be between 0 and 6, got: {0}")]
    InvalidDayOfWeek(u8),
    #[error("Start time {start} must be before end time {end}")]
    EmptyWindow { start: Time, end: Time },
}

impl TimeSlot {
    pub fn new(
        id: ID,
        provider_id: ID,
        day_of_week: u8,
        start_time: Time,
        end_time: Time,
    ) -> Result<Self, TimeSlotError> {
        let slot = Self {
            id,
            provider_id,
            day_of_week,
            start_time,
            end_time,
            is_available: true,
        };
        slot.validate()?;
        Ok(slot)
    }

    pub fn validate(&self) -> Result<(), TimeSlotError> {
        if self.day_of_week > 6 {
            return Err(TimeSlotError::InvalidDayOfWeek(self.day_of_week));
        }
        if self.start_time >= self.end_time {
            return Err(TimeSlotError::EmptyWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    pub fn applies_to(&self, provider_id: &ID, day_of_week: u8) -> bool {
        self.is_available && self.provider_id == *provider_id && self.day_of_week == day_of_week
    }
}

impl Entity for TimeSlot {
    fn id(&self) -> &ID {
        &self.id
    }
}
