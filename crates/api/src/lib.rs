//! Operations of the booking application. Each operation is a `UseCase`
//! executed against a `RendezvousContext`, with a plain async function
//! wrapping it for callers that do not need cancellation.

pub mod account;
pub mod availability;
pub mod booking;
mod error;
pub mod provider;
pub mod service;
mod shared;

pub use error::RendezvousError;
pub use shared::usecase::{execute, execute_cancellable, UseCase};
