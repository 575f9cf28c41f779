//! Session timer implementation.
//!
//! The timer is a wall-clock-based state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()`
//! periodically (once a second is plenty). Elapsed time is always
//! computed as `now - start`, never accumulated from ticks, so missed
//! ticks (a backgrounded process, a suspended machine) cost nothing.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle
//! ```
//!
//! The timer persists nothing itself; `stop(commit, ..)` hands the
//! floored worked minutes back to the caller, which feeds them to the
//! scoring engine.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::events::Event;

/// Smallest accepted custom duration.
pub const MIN_CUSTOM_MINUTES: u32 = 1;
/// Largest accepted custom duration.
pub const MAX_CUSTOM_MINUTES: u32 = 180;
/// Duration a fresh engine starts with.
pub const DEFAULT_DURATION_MIN: u32 = 25;
/// Preset session lengths offered by the presentation layer.
pub const PRESET_MINUTES: [u32; 4] = [15, 25, 45, 60];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

/// Core session timer.
///
/// Operates on wall-clock deltas -- no internal thread. The caller is
/// responsible for calling `tick()` periodically while running.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    state: TimerState,
    /// Configured session length in seconds.
    duration_secs: u64,
    /// Epoch ms captured at start; `None` while idle.
    #[serde(default)]
    started_epoch_ms: Option<u64>,
    /// Completion has already been reported for the current run.
    #[serde(default)]
    completion_notified: bool,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerEngine {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            duration_secs: u64::from(DEFAULT_DURATION_MIN) * 60,
            started_epoch_ms: None,
            completion_notified: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Seconds since start; 0 while idle.
    pub fn elapsed_secs(&self, clock: &dyn Clock) -> u64 {
        match self.started_epoch_ms {
            Some(start_ms) => clock.epoch_ms().saturating_sub(start_ms) / 1000,
            None => 0,
        }
    }

    /// Seconds left of the configured duration; saturates at 0 if the
    /// session has run over.
    pub fn remaining_secs(&self, clock: &dyn Clock) -> u64 {
        self.duration_secs.saturating_sub(self.elapsed_secs(clock))
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, clock: &dyn Clock) -> Event {
        Event::StateSnapshot {
            state: self.state,
            duration_secs: self.duration_secs,
            elapsed_secs: self.elapsed_secs(clock),
            remaining_secs: self.remaining_secs(clock),
            at: clock.now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Configure the session length, in minutes. Accepted only while idle
    /// and within 1-180; anything else is ignored and returns `false`.
    pub fn set_duration(&mut self, minutes: u32) -> bool {
        if self.state != TimerState::Idle {
            return false;
        }
        if !(MIN_CUSTOM_MINUTES..=MAX_CUSTOM_MINUTES).contains(&minutes) {
            return false;
        }
        self.duration_secs = u64::from(minutes) * 60;
        true
    }

    pub fn start(&mut self, clock: &dyn Clock) -> Option<Event> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running;
                self.started_epoch_ms = Some(clock.epoch_ms());
                self.completion_notified = false;
                Some(Event::TimerStarted {
                    duration_secs: self.duration_secs,
                    at: clock.now(),
                })
            }
            TimerState::Running => None, // Already running.
        }
    }

    /// Call periodically while running. Returns `Some(Event::TimerCompleted)`
    /// once, when the configured duration has fully elapsed. The engine
    /// stays running: the session remains open until the caller commits
    /// or discards it via `stop`.
    pub fn tick(&mut self, clock: &dyn Clock) -> Option<Event> {
        if self.state != TimerState::Running || self.completion_notified {
            return None;
        }
        if self.remaining_secs(clock) == 0 {
            self.completion_notified = true;
            return Some(Event::TimerCompleted {
                elapsed_secs: self.elapsed_secs(clock),
                at: clock.now(),
            });
        }
        None
    }

    /// Transition to idle. With `commit` and any elapsed time, returns
    /// the worked minutes (elapsed seconds / 60, floored -- a sub-minute
    /// session commits as 0 minutes). Discards return `None` and leave no
    /// trace.
    pub fn stop(&mut self, commit: bool, clock: &dyn Clock) -> Option<u32> {
        if self.state != TimerState::Running {
            return None;
        }
        let elapsed = self.elapsed_secs(clock);
        self.state = TimerState::Idle;
        self.started_epoch_ms = None;
        self.completion_notified = false;
        if commit && elapsed > 0 {
            Some((elapsed / 60) as u32)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn clock_at_9am() -> FixedClock {
        FixedClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[test]
    fn starts_idle_with_default_duration() {
        let engine = TimerEngine::new();
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.duration_secs(), 25 * 60);
    }

    #[test]
    fn set_duration_bounds() {
        let mut engine = TimerEngine::new();
        assert!(engine.set_duration(1));
        assert!(engine.set_duration(180));
        assert!(!engine.set_duration(0));
        assert!(!engine.set_duration(181));
        assert_eq!(engine.duration_secs(), 180 * 60);
    }

    #[test]
    fn set_duration_rejected_while_running() {
        let clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        engine.start(&clock);
        assert!(!engine.set_duration(45));
        assert_eq!(engine.duration_secs(), 25 * 60);
    }

    #[test]
    fn elapsed_is_wall_clock_based() {
        let mut clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        engine.start(&clock);

        // Jump 10 minutes with no intervening ticks.
        clock.advance(chrono::Duration::minutes(10));
        assert_eq!(engine.elapsed_secs(&clock), 600);
        assert_eq!(engine.remaining_secs(&clock), 15 * 60);
    }

    #[test]
    fn tick_fires_completion_exactly_once() {
        let mut clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        engine.set_duration(1);
        engine.start(&clock);

        assert!(engine.tick(&clock).is_none());
        clock.advance(chrono::Duration::seconds(60));
        assert!(matches!(
            engine.tick(&clock),
            Some(Event::TimerCompleted { elapsed_secs: 60, .. })
        ));
        // Latched: further ticks stay quiet.
        clock.advance(chrono::Duration::seconds(5));
        assert!(engine.tick(&clock).is_none());
        assert_eq!(engine.state(), TimerState::Running);
    }

    #[test]
    fn stop_commit_floors_to_minutes() {
        let mut clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        engine.start(&clock);

        clock.advance(chrono::Duration::seconds(150));
        assert_eq!(engine.stop(true, &clock), Some(2));
        assert_eq!(engine.state(), TimerState::Idle);
    }

    #[test]
    fn sub_minute_session_commits_as_zero_minutes() {
        let mut clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        engine.start(&clock);

        clock.advance(chrono::Duration::seconds(30));
        assert_eq!(engine.stop(true, &clock), Some(0));
    }

    #[test]
    fn stop_discard_returns_nothing() {
        let mut clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        engine.start(&clock);

        clock.advance(chrono::Duration::minutes(5));
        assert_eq!(engine.stop(false, &clock), None);
        assert_eq!(engine.state(), TimerState::Idle);
    }

    #[test]
    fn stop_with_no_elapsed_time_is_a_discard() {
        let clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        engine.start(&clock);
        assert_eq!(engine.stop(true, &clock), None);
    }

    #[test]
    fn stop_while_idle_is_a_no_op() {
        let clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        assert_eq!(engine.stop(true, &clock), None);
    }

    #[test]
    fn overrun_counts_real_elapsed_time() {
        let mut clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        engine.set_duration(25);
        engine.start(&clock);

        // Backgrounded well past the configured duration.
        clock.advance(chrono::Duration::minutes(40));
        assert_eq!(engine.remaining_secs(&clock), 0);
        assert_eq!(engine.stop(true, &clock), Some(40));
    }

    #[test]
    fn snapshot_round_trips_through_serde() {
        let clock = clock_at_9am();
        let mut engine = TimerEngine::new();
        engine.start(&clock);

        let json = serde_json::to_string(&engine).unwrap();
        let restored: TimerEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.state(), TimerState::Running);
        assert_eq!(restored.duration_secs(), engine.duration_secs());
    }
}
