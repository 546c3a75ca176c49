mod config;
mod kv;
mod repos;
mod seed;
mod state;
mod system;

pub use config::Config;
pub use kv::{FileKeyValueStore, IKeyValueStore, InMemoryKeyValueStore, StoreError};
pub use repos::{
    IBookingRepo, IServiceRepo, ISessionRepo, ITimeSlotRepo, IUserRepo, Repos,
};
pub use state::AppState;
use std::sync::Arc;
pub use system::{ISys, RealSys};
use tracing::info;

#[derive(Clone)]
pub struct RendezvousContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl RendezvousContext {
    pub async fn create(kv: Arc<dyn IKeyValueStore>, config: Config) -> Result<Self, StoreError> {
        let repos = Repos::create(kv).await?;
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<RendezvousContext> {
    let config = Config::new();
    let path = config.storage_path();
    info!("Opening storage at {}", path.display());
    let kv = FileKeyValueStore::open(path).await?;
    Ok(RendezvousContext::create(Arc::new(kv), config).await?)
}

/// Context over a fresh in memory storage with the default dataset and
/// no confirmation delay
pub async fn setup_inmemory_context() -> RendezvousContext {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    RendezvousContext::create(kv, Config::immediate(std::env::temp_dir()))
        .await
        .expect("In memory storage to be writable")
}
