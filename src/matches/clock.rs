//! Time source for match timestamps

use chrono::{DateTime, Local};
use std::sync::Mutex;

/// Supplies the local time a match is recorded at
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        crate::utils::current_timestamp()
    }
}

/// Clock returning a settable instant, for tests and replays
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<Local>) {
        if let Ok(mut current) = self.instant.lock() {
            *current = instant;
        }
    }

    /// Move the clock forward by `seconds`
    pub fn advance_seconds(&self, seconds: i64) {
        if let Ok(mut current) = self.instant.lock() {
            *current += chrono::Duration::seconds(seconds);
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
            .lock()
            .map(|instant| *instant)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}
