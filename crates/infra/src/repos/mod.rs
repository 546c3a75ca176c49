mod booking;
mod service;
mod session;
pub(crate) mod shared;
mod time_slot;
mod user;

use crate::kv::{IKeyValueStore, StoreError};
use crate::seed;
use crate::state::{AppState, BOOKINGS_KEY, SERVICES_KEY, USERS_KEY};
pub use booking::{IBookingRepo, StoredBookingRepo};
pub use service::{IServiceRepo, StoredServiceRepo};
pub use session::{ISessionRepo, StoredSessionRepo};
use shared::collection_store::CollectionStore;
use std::sync::Arc;
pub use time_slot::{ITimeSlotRepo, InMemoryTimeSlotRepo};
use tracing::info;
pub use user::{IUserRepo, StoredUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub services: Arc<dyn IServiceRepo>,
    pub bookings: Arc<dyn IBookingRepo>,
    pub time_slots: Arc<dyn ITimeSlotRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub session: Arc<dyn ISessionRepo>,
}

impl Repos {
    /// Loads the stored `AppState` from `kv`, seeding whatever is missing
    pub async fn create(kv: Arc<dyn IKeyValueStore>) -> Result<Self, StoreError> {
        info!("Loading application state ...");
        let state = AppState::load(kv.as_ref()).await?;
        info!(
            "Loading application state ... [done] ({} services, {} bookings, {} users)",
            state.services.len(),
            state.bookings.len(),
            state.users.len()
        );
        Ok(Self::from_state(kv, state))
    }

    /// Repositories over an already loaded `AppState`. Writes go to `kv`.
    pub fn from_state(kv: Arc<dyn IKeyValueStore>, state: AppState) -> Self {
        Self {
            services: Arc::new(StoredServiceRepo::new(CollectionStore::new(
                SERVICES_KEY,
                kv.clone(),
                state.services,
            ))),
            bookings: Arc::new(StoredBookingRepo::new(CollectionStore::new(
                BOOKINGS_KEY,
                kv.clone(),
                state.bookings,
            ))),
            time_slots: Arc::new(InMemoryTimeSlotRepo::new(seed::default_time_slots())),
            users: Arc::new(StoredUserRepo::new(CollectionStore::new(
                USERS_KEY,
                kv.clone(),
                state.users,
            ))),
            session: Arc::new(StoredSessionRepo::new(kv, state.session)),
        }
    }
}
