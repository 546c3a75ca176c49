use crate::kv::{IKeyValueStore, StoreError};
use crate::repos::shared::collection_store::{encode, load};
use crate::seed;
use rendezvous_domain::{Booking, Service, Session, User, UserType};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{info, warn};

pub const CURRENT_USER_KEY: &str = "currentUser";
pub const USER_TYPE_KEY: &str = "userType";
pub const BOOKINGS_KEY: &str = "bookings";
pub const SERVICES_KEY: &str = "services";
pub const USERS_KEY: &str = "users";

/// Everything the application keeps in storage: the signed in user, the
/// two shared collections and the user directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
    pub services: Vec<Service>,
    pub bookings: Vec<Booking>,
    pub users: Vec<User>,
}

impl AppState {
    /// Signed out with the default catalogue, bookings and directory
    pub fn seeded() -> Self {
        Self {
            session: None,
            services: seed::default_services(),
            bookings: seed::default_bookings(),
            users: seed::default_users(),
        }
    }

    /// Reads all keys in one batch. Collections that are missing or can not
    /// be decoded are replaced by the default dataset and an invalid session
    /// is signed out. Any such repair is written back with one `save`.
    pub async fn load(kv: &dyn IKeyValueStore) -> Result<Self, StoreError> {
        let mut raw = kv
            .get_many(&[
                CURRENT_USER_KEY,
                USER_TYPE_KEY,
                SERVICES_KEY,
                BOOKINGS_KEY,
                USERS_KEY,
            ])
            .await?;

        let defaults = Self::seeded();
        let mut repaired = false;
        let services = load_collection(&mut raw, SERVICES_KEY, defaults.services, &mut repaired);
        let bookings = load_collection(&mut raw, BOOKINGS_KEY, defaults.bookings, &mut repaired);
        let mut users = load_collection(&mut raw, USERS_KEY, defaults.users, &mut repaired);

        let session = match (raw.remove(CURRENT_USER_KEY), raw.remove(USER_TYPE_KEY)) {
            (None, None) => None,
            (user, user_type) => {
                let session = decode_session(user.as_deref(), user_type.as_deref());
                if session.is_none() {
                    warn!("Dropping invalid stored session");
                    repaired = true;
                }
                session
            }
        };

        if let Some(session) = &session {
            if !users.iter().any(|u| u.id == session.user.id) {
                info!("Adding signed in user {} to the directory", session.user.id);
                users.push(session.user.clone());
                repaired = true;
            }
        }

        let state = Self {
            session,
            services,
            bookings,
            users,
        };
        if repaired {
            state.save(kv).await?;
        }
        Ok(state)
    }

    /// Writes every key in one batch. A signed out state removes both
    /// session keys in that same batch.
    pub async fn save(&self, kv: &dyn IKeyValueStore) -> Result<(), StoreError> {
        let mut entries = vec![
            (SERVICES_KEY.to_string(), encode(SERVICES_KEY, &self.services)?),
            (BOOKINGS_KEY.to_string(), encode(BOOKINGS_KEY, &self.bookings)?),
            (USERS_KEY.to_string(), encode(USERS_KEY, &self.users)?),
        ];
        let removed: &[&str] = match &self.session {
            Some(session) => {
                entries.extend(encode_session(session)?);
                &[]
            }
            None => &[CURRENT_USER_KEY, USER_TYPE_KEY],
        };
        kv.write_batch(entries, removed).await
    }
}

fn load_collection<T: DeserializeOwned>(
    raw: &mut HashMap<String, String>,
    key: &str,
    seed: Vec<T>,
    repaired: &mut bool,
) -> Vec<T> {
    let (items, seeded) = load(key, raw.remove(key), seed);
    *repaired |= seeded;
    items
}

/// The two session keys. `currentUser` holds the user as JSON and
/// `userType` the bare type name.
pub fn encode_session(session: &Session) -> Result<Vec<(String, String)>, StoreError> {
    let user = serde_json::to_string(&session.user).map_err(|source| {
        StoreError::Serialization {
            key: CURRENT_USER_KEY.to_string(),
            source,
        }
    })?;
    Ok(vec![
        (CURRENT_USER_KEY.to_string(), user),
        (USER_TYPE_KEY.to_string(), session.user_type().to_string()),
    ])
}

/// Both keys must be present, readable and agree on the user type
pub fn decode_session(user: Option<&str>, user_type: Option<&str>) -> Option<Session> {
    let user: User = serde_json::from_str(user?).ok()?;
    let user_type: UserType = user_type?.parse().ok()?;
    if user.user_type != user_type {
        return None;
    }
    Some(Session::new(user))
}
