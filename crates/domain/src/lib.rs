pub mod availability;
mod booking;
pub mod date;
pub mod query;
mod service;
mod shared;
mod time;
mod time_slot;
mod user;

pub use availability::{get_available_slots, SLOT_INTERVAL_MINUTES};
pub use booking::{Booking, BookingStatus, InvalidRatingError, InvalidStatusError, Rating};
pub use date::InvalidDateError;
pub use query::{AverageRating, BookingFilter, ProviderStats};
pub use service::{InvalidServiceError, Service, ServicePatch, DEFAULT_SERVICE_IMAGE};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use time::{InvalidTimeError, Time};
pub use time_slot::{TimeSlot, TimeSlotError};
pub use user::{InvalidUserTypeError, Session, User, UserPatch, UserType, DEFAULT_USER_PHOTO};

pub use chrono::{NaiveDate, NaiveDateTime};
