//! Source of the "current instant" for a run.
//!
//! The archive layout and the file names are derived from the time a run starts, so
//! the pipeline asks a [`Clock`] instead of reading the system time itself. Tests pin
//! the instant with a [`FixedClock`].

use chrono::{DateTime, Utc};

/// Supplies the instant a run is stamped with.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use metar_archiver::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2025, 9, 12, 14, 30, 5).unwrap();
/// let clock = FixedClock(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
