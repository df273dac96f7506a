use chrono::{NaiveDateTime, Utc};

/// Source of "now" for status derivation and delete eligibility.
///
/// Stored timestamps are naive wall-clock values; the production clock reads
/// UTC wall-clock to match them. Handlers take the clock from app state so
/// tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}
