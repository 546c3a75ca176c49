use crate::{date::day_of_week, time::Time, time_slot::TimeSlot, ID};
use chrono::NaiveDate;

/// Distance in minutes between two generated start times. This is not
/// derived from the duration of the service being booked.
pub const SLOT_INTERVAL_MINUTES: u32 = 30;

/// Finds the template that is used for the given provider and date.
///
/// Only the first available template for the weekday is used, later
/// templates for the same weekday are ignored.
pub fn find_template<'a>(
    templates: &'a [TimeSlot],
    provider_id: &ID,
    date: &NaiveDate,
) -> Option<&'a TimeSlot> {
    let weekday = day_of_week(date);
    templates.iter().find(|t| t.applies_to(provider_id, weekday))
}

/// Bookable start times of a provider on a date, in increasing order.
///
/// Existing bookings are not subtracted and the duration of the service
/// is not taken into account.
pub fn get_available_slots(templates: &[TimeSlot], provider_id: &ID, date: &NaiveDate) -> Vec<Time> {
    match find_template(templates, provider_id, date) {
        Some(template) => expand_template(template),
        None => Vec::new(),
    }
}

/// Every start time between `start_time` (inclusive) and `end_time`
/// (exclusive) with `SLOT_INTERVAL_MINUTES` between them
pub fn expand_template(template: &TimeSlot) -> Vec<Time> {
    let mut slots = Vec::new();
    let mut cursor = Some(template.start_time);
    while let Some(time) = cursor {
        if time >= template.end_time {
            break;
        }
        slots.push(time);
        cursor = time.add_minutes(SLOT_INTERVAL_MINUTES);
    }

    slots
}
