//! # WorkTracker Core Library
//!
//! This library provides the core business logic for the WorkTracker
//! productivity tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary; any GUI would be
//! a thin skin over the same core library.
//!
//! ## Architecture
//!
//! - **Session Timer**: A wall-clock-based state machine that requires
//!   the caller to periodically invoke `tick()` for progress updates
//! - **Scoring Engine**: Converts a completed session into points and
//!   detects daily-goal attainment with a one-per-day bonus
//! - **Reports**: Daily totals, monthly summaries, and the six-week
//!   calendar grid
//! - **Reward Ledger**: Point-redeemable rewards, an archive, and the
//!   redemption history
//! - **Storage**: A single JSON document holding the whole aggregate
//!   state, merged over schema defaults on load
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`record_session`]: Scoring and goal-bonus entry point
//! - [`Store`]: Document persistence, export, and import
//! - [`Clock`]: Time source trait, pinned in tests

pub mod clock;
pub mod error;
pub mod events;
pub mod rewards;
pub mod scoring;
pub mod stats;
pub mod storage;
pub mod timer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result, RewardError, StoreError, ValidationError};
pub use events::Event;
pub use rewards::RewardDraft;
pub use scoring::{record_session, SessionInput, SessionOutcome};
pub use stats::{
    calendar_cells, day_sessions, day_total, month_summary, today_progress, CalendarCell,
    MonthSummary, TodayProgress,
};
pub use storage::{data_dir, Document, Redemption, Reward, SessionRecord, Settings, Store};
pub use timer::{TimerEngine, TimerState};
