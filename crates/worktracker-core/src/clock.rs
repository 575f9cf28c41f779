//! Wall-clock source.
//!
//! The timer, the scoring engine, and the calendar all take the current
//! time from a [`Clock`] rather than reading it ambiently, so tests can
//! pin both the instant and the local calendar date.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Supplies the current instant and the local calendar date.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// The local calendar date for `now()`. Session records are dated with
    /// this, not the UTC date.
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch.
    fn epoch_ms(&self) -> u64 {
        self.now().timestamp_millis().max(0) as u64
    }
}

/// System clock: `Utc::now()` plus the local timezone's calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed instant and date. Advanced manually by tests.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, date: NaiveDate) -> Self {
        Self { instant, date }
    }

    /// Move the instant forward. The calendar date is left alone so tests
    /// control day boundaries explicitly via [`FixedClock::set_date`].
    pub fn advance(&mut self, delta: chrono::Duration) {
        self.instant += delta;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}
