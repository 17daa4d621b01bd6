//! Engine clock — the only source of "now" inside the engine.
//!
//! The computation timestamp and the days-alive figure are the only
//! time-dependent fields of a report, so the clock is an explicit,
//! caller-constructed dependency rather than a call to `Utc::now()`
//! buried in the pipeline. Tests freeze it and assert full-object
//! equality on the result.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. The production clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant. Test and replay use only.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pinned to the Unix epoch — the canonical fixture instant.
    pub fn at_epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
