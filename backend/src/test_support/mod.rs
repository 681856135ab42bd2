//! Shared test doubles for policy and lifecycle tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock that only moves when a test advances it.
///
/// Services read creation timestamps from an injected [`Clock`]; pinning it
/// lets tests assert `created_at` values exactly and replay the original
/// fixtures' day-apart comment threads.
#[derive(Debug)]
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Clock pinned at `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Clock pinned at an arbitrary but fixed instant.
    #[must_use]
    pub fn fixed() -> Self {
        let now = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .unwrap_or_default();
        Self::new(now)
    }

    /// Move the clock forward by whole days.
    pub fn advance_days(&self, days: i64) {
        *self.lock() += Duration::days(days);
    }

    /// Move the clock forward by seconds.
    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock() += Duration::seconds(seconds);
    }

    fn lock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock()
    }
}
