//! Daily and monthly point totals.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::storage::{Document, SessionRecord};

/// Sum of points plus goal bonus over every session of the given date.
pub fn day_total(doc: &Document, date: NaiveDate) -> i64 {
    doc.sessions_on(date).map(SessionRecord::total).sum()
}

/// The sessions of a date, in append order, for the day-detail view.
pub fn day_sessions(doc: &Document, date: NaiveDate) -> Vec<&SessionRecord> {
    doc.sessions_on(date).collect()
}

/// Headline numbers for the main view: balance, today's points, and
/// progress toward the daily goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayProgress {
    pub total_points: i64,
    pub today_points: i64,
    pub daily_goal: u32,
    /// `today_points / daily_goal`, clamped to [0, 1].
    pub progress: f64,
}

pub fn today_progress(doc: &Document, today: NaiveDate) -> TodayProgress {
    let today_points = day_total(doc, today);
    let daily_goal = doc.settings.daily_goal;
    let progress = if daily_goal == 0 {
        0.0
    } else {
        (today_points as f64 / f64::from(daily_goal)).clamp(0.0, 1.0)
    };
    TodayProgress {
        total_points: doc.total_points,
        today_points,
        daily_goal,
        progress,
    }
}

/// Monthly rollup for the reports header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    /// Average of the day totals, over days with at least one session.
    /// Days without sessions do not drag the average down.
    pub average_daily_points: i64,
    /// Days (with sessions) whose total met the daily goal.
    pub goals_achieved: usize,
    /// Days with at least one session.
    pub active_days: usize,
}

pub fn month_summary(doc: &Document, year: i32, month: u32) -> MonthSummary {
    let daily_totals: BTreeMap<NaiveDate, i64> = doc
        .cycles
        .iter()
        .filter(|c| c.date.year() == year && c.date.month() == month)
        .fold(BTreeMap::new(), |mut totals, c| {
            *totals.entry(c.date).or_insert(0) += c.total();
            totals
        });

    let active_days = daily_totals.len();
    let average_daily_points = if active_days == 0 {
        0
    } else {
        let sum: i64 = daily_totals.values().sum();
        (sum as f64 / active_days as f64).round() as i64
    };
    let goals_achieved = daily_totals
        .values()
        .filter(|&&total| total >= i64::from(doc.settings.daily_goal))
        .count();

    MonthSummary {
        year,
        month,
        average_daily_points,
        goals_achieved,
        active_days,
    }
}
