mod get_available_slots;

pub use get_available_slots::{get_available_slots, GetAvailableSlotsUseCase, SlotsFor};
