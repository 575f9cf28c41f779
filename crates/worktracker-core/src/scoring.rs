//! Session scoring and daily-goal detection.
//!
//! A completed session is converted to points with the configured
//! weights, appended to the history, and checked against the daily goal.
//! The first session that pushes a day's cumulative total past the goal
//! carries the goal bonus; every later session that day does not.
//!
//! All point mutations for sessions funnel through [`record_session`],
//! which keeps the `total_points` invariant maintainable in one place.

use crate::clock::Clock;
use crate::error::ValidationError;
use crate::events::Event;
use crate::storage::{Document, SessionRecord};

/// User-supplied fields for a session about to be recorded.
#[derive(Debug, Clone)]
pub struct SessionInput {
    pub title: String,
    pub description: String,
    /// Self-rating, 1-5.
    pub rating: u8,
    /// Floored elapsed minutes handed over by the timer.
    pub work_minutes: u32,
}

/// Result of recording a session.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub record: SessionRecord,
    /// Bonus attached to this record, if it was the one that met the
    /// daily goal.
    pub goal_bonus_awarded: Option<u32>,
    pub events: Vec<Event>,
}

/// Score a finished session and commit it to the document.
///
/// Points are `round(work_minutes * time_weight + rating *
/// performance_weight)`. If the day's cumulative total (including this
/// record) reaches the daily goal and no record of that date carries the
/// bonus yet, the bonus is attached to this record and added to the
/// balance, firing a [`Event::GoalAchieved`].
///
/// # Errors
///
/// Rejects an empty title or a rating outside 1-5 without touching the
/// document.
pub fn record_session(
    doc: &mut Document,
    input: SessionInput,
    clock: &dyn Clock,
) -> Result<SessionOutcome, ValidationError> {
    if input.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if !(1..=5).contains(&input.rating) {
        return Err(ValidationError::RatingOutOfRange {
            rating: input.rating,
        });
    }

    let now = clock.now();
    let date = clock.today();
    let points = (f64::from(input.work_minutes) * doc.settings.time_weight
        + f64::from(input.rating) * f64::from(doc.settings.performance_weight))
    .round() as i64;

    let mut id = clock.epoch_ms() as i64;
    while doc.cycles.iter().any(|c| c.id == id) {
        id += 1;
    }

    let day_total_before: i64 = doc.sessions_on(date).map(SessionRecord::total).sum();
    let bonus_already_given = doc.sessions_on(date).any(|c| c.goal_bonus.is_some());

    let mut record = SessionRecord {
        id,
        date,
        title: input.title,
        description: input.description,
        rating: input.rating,
        work_minutes: input.work_minutes,
        points,
        goal_bonus: None,
        timestamp: now,
    };
    doc.total_points += points;

    let mut events = vec![Event::SessionRecorded {
        id,
        date,
        points,
        at: now,
    }];

    let mut goal_bonus_awarded = None;
    if day_total_before + points >= i64::from(doc.settings.daily_goal) && !bonus_already_given {
        let bonus = doc.settings.goal_bonus;
        record.goal_bonus = Some(bonus);
        doc.total_points += i64::from(bonus);
        goal_bonus_awarded = Some(bonus);
        tracing::debug!(%date, bonus, "daily goal achieved");
        events.push(Event::GoalAchieved {
            date,
            bonus,
            at: now,
        });
    }

    doc.cycles.push(record.clone());
    Ok(SessionOutcome {
        record,
        goal_bonus_awarded,
        events,
    })
}
