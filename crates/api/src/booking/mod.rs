mod cancel_booking;
mod create_booking;
mod get_booking;
mod get_client_bookings;
mod get_provider_bookings;
mod review_booking;
mod update_booking_status;

pub use cancel_booking::{cancel_booking, CancelBookingUseCase};
pub use create_booking::{create_booking, CreateBookingUseCase};
pub use get_booking::{get_booking, BookingDetails, GetBookingUseCase};
pub use get_client_bookings::{get_client_bookings, ClientBookings, GetClientBookingsUseCase};
pub use get_provider_bookings::{get_provider_bookings, GetProviderBookingsUseCase};
pub use review_booking::{review_booking, ReviewBookingUseCase};
pub use update_booking_status::{update_booking_status, UpdateBookingStatusUseCase};
