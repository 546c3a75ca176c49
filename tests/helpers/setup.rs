use rendezvous_infra::{Config, FileKeyValueStore, ISys, RendezvousContext};
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestApp {
    pub ctx: RendezvousContext,
    pub config: Config,
    // Removes the storage when the test ends
    _dir: TempDir,
}

impl TestApp {
    /// Reads the storage from disk again, as a restarted application would
    pub async fn restart(self) -> Self {
        let ctx = open(&self.config).await;
        Self {
            ctx,
            config: self.config,
            _dir: self._dir,
        }
    }
}

pub struct StaticTimeSys {}
impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        1_762_164_000_000 // 2025-11-03T10:00:00Z
    }
}

async fn open(config: &Config) -> RendezvousContext {
    let kv = FileKeyValueStore::open(config.storage_path())
        .await
        .expect("Expected storage to open");
    let mut ctx = RendezvousContext::create(Arc::new(kv), config.clone())
        .await
        .expect("Expected application state to load");
    ctx.sys = Arc::new(StaticTimeSys {});
    ctx
}

/// Application backed by a storage file in a fresh temporary directory
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create data dir");
    let config = Config::immediate(dir.path().to_path_buf());
    let ctx = open(&config).await;

    TestApp {
        ctx,
        config,
        _dir: dir,
    }
}
