use std::{path::PathBuf, time::Duration};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the storage document
    pub data_dir: PathBuf,
    /// Simulated latency before a new `Booking` is confirmed and stored
    pub booking_confirmation_delay: Duration,
    /// How many upcoming `Booking`s the provider dashboard shows
    pub dashboard_upcoming_limit: usize,
}

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_CONFIRMATION_DELAY_MS: u64 = 1000;
const DEFAULT_DASHBOARD_UPCOMING_LIMIT: usize = 5;

impl Config {
    pub fn new() -> Self {
        let data_dir = match std::env::var("RENDEZVOUS_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => {
                info!(
                    "Did not find RENDEZVOUS_DATA_DIR environment variable. Using: {}",
                    DEFAULT_DATA_DIR
                );
                PathBuf::from(DEFAULT_DATA_DIR)
            }
        };
        let delay_ms = parse_env(
            "RENDEZVOUS_CONFIRMATION_DELAY_MS",
            DEFAULT_CONFIRMATION_DELAY_MS,
        );
        let dashboard_upcoming_limit = parse_env(
            "RENDEZVOUS_DASHBOARD_UPCOMING_LIMIT",
            DEFAULT_DASHBOARD_UPCOMING_LIMIT,
        );

        Self {
            data_dir,
            booking_confirmation_delay: Duration::from_millis(delay_ms),
            dashboard_upcoming_limit,
        }
    }

    /// Config for tests: no confirmation delay and storage in `data_dir`
    pub fn immediate(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            booking_confirmation_delay: Duration::from_millis(0),
            dashboard_upcoming_limit: DEFAULT_DASHBOARD_UPCOMING_LIMIT,
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }
}

fn parse_env<T: std::str::FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    let value = match std::env::var(name) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                name, value, default
            );
            default
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
