use chrono::Utc;
use rendezvous_domain::{date, NaiveDate, NaiveDateTime};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    fn now(&self) -> NaiveDateTime {
        date::from_timestamp_millis(self.get_timestamp_millis())
    }

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
