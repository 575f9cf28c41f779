//! Point reports over the session history.
//!
//! Everything here is a pure read of the document: daily totals, monthly
//! summaries, and the six-week calendar grid the reports view renders.

mod calendar;
mod summary;

pub use calendar::{calendar_cells, CalendarCell, CALENDAR_CELLS};
pub use summary::{
    day_sessions, day_total, month_summary, today_progress, MonthSummary, TodayProgress,
};
