use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::TimerState;

/// Every state change in the system produces an Event.
/// The CLI prints them; a GUI shell would subscribe to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The configured duration has fully elapsed. Emitted once per run;
    /// the session is still open until the caller commits or discards it.
    TimerCompleted {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        duration_secs: u64,
        elapsed_secs: u64,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionRecorded {
        id: i64,
        date: NaiveDate,
        points: i64,
        at: DateTime<Utc>,
    },
    /// The daily point goal was reached for the first time today.
    GoalAchieved {
        date: NaiveDate,
        bonus: u32,
        at: DateTime<Utc>,
    },
    RewardPurchased {
        id: Uuid,
        title: String,
        cost: u32,
        balance: i64,
        at: DateTime<Utc>,
    },
}
