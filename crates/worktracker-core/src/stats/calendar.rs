//! Six-week calendar grid for the monthly report.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::storage::Document;

use super::summary::day_total;

/// Cells in the grid: six full weeks.
pub const CALENDAR_CELLS: usize = 42;

/// One day descriptor of the calendar grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Belongs to the displayed month (as opposed to the leading/trailing
    /// fill days).
    pub in_month: bool,
    /// Strictly after the reporting day.
    pub future: bool,
    pub day_total: i64,
    pub goal_met: bool,
    /// `day_total / daily_goal` clamped to [0, 1]; monotonic in the day
    /// total. How this maps to a color is the presentation layer's call.
    pub intensity: f64,
}

/// Build the 42-cell grid for a month: six weeks starting from the
/// Sunday on or before the 1st. Returns an empty vector for an invalid
/// year/month pair.
pub fn calendar_cells(doc: &Document, year: i32, month: u32, today: NaiveDate) -> Vec<CalendarCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let daily_goal = doc.settings.daily_goal;

    (0..CALENDAR_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let total = day_total(doc, date);
            let intensity = if daily_goal == 0 {
                if total > 0 {
                    1.0
                } else {
                    0.0
                }
            } else {
                (total as f64 / f64::from(daily_goal)).clamp(0.0, 1.0)
            };
            CalendarCell {
                date,
                in_month: date.month() == month && date.year() == year,
                future: date > today,
                day_total: total,
                goal_met: total > 0 && total >= i64::from(daily_goal),
                intensity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SessionRecord;
    use chrono::Utc;

    fn doc_with(points_by_date: &[(&str, i64)]) -> Document {
        let mut doc = Document::default();
        doc.settings.daily_goal = 100;
        for &(date, points) in points_by_date {
            doc.cycles.push(SessionRecord {
                id: 0,
                date: date.parse().unwrap(),
                title: "work".into(),
                description: String::new(),
                rating: 3,
                work_minutes: 30,
                points,
                goal_bonus: None,
                timestamp: Utc::now(),
            });
        }
        doc
    }

    #[test]
    fn grid_is_always_42_cells_starting_sunday() {
        let doc = doc_with(&[]);
        let today = "2024-03-15".parse().unwrap();

        // March 2024 starts on a Friday; the grid starts the prior Sunday.
        let cells = calendar_cells(&doc, 2024, 3, today);
        assert_eq!(cells.len(), CALENDAR_CELLS);
        assert_eq!(cells[0].date, "2024-02-25".parse::<NaiveDate>().unwrap());
        assert!(!cells[0].in_month);
        assert_eq!(cells[5].date, "2024-03-01".parse::<NaiveDate>().unwrap());
        assert!(cells[5].in_month);
    }

    #[test]
    fn month_starting_sunday_begins_on_the_first() {
        let doc = doc_with(&[]);
        let today = "2024-09-10".parse().unwrap();

        // September 2024 starts on a Sunday.
        let cells = calendar_cells(&doc, 2024, 9, today);
        assert_eq!(cells[0].date, "2024-09-01".parse::<NaiveDate>().unwrap());
        assert!(cells[0].in_month);
    }

    #[test]
    fn future_flag_is_relative_to_today() {
        let doc = doc_with(&[]);
        let today: NaiveDate = "2024-03-15".parse().unwrap();

        let cells = calendar_cells(&doc, 2024, 3, today);
        let by_date = |d: &str| {
            let date: NaiveDate = d.parse().unwrap();
            cells.iter().find(|c| c.date == date).unwrap()
        };
        assert!(!by_date("2024-03-15").future);
        assert!(by_date("2024-03-16").future);
    }

    #[test]
    fn intensity_is_monotonic_and_clamped() {
        let doc = doc_with(&[
            ("2024-03-04", 25),
            ("2024-03-05", 50),
            ("2024-03-06", 100),
            ("2024-03-07", 400),
        ]);
        let today = "2024-03-31".parse().unwrap();
        let cells = calendar_cells(&doc, 2024, 3, today);

        let intensity = |d: &str| {
            let date: NaiveDate = d.parse().unwrap();
            cells.iter().find(|c| c.date == date).unwrap().intensity
        };
        assert_eq!(intensity("2024-03-03"), 0.0);
        assert!(intensity("2024-03-04") < intensity("2024-03-05"));
        assert!(intensity("2024-03-05") < intensity("2024-03-06"));
        assert_eq!(intensity("2024-03-06"), 1.0);
        assert_eq!(intensity("2024-03-07"), 1.0);
    }

    #[test]
    fn goal_met_requires_data() {
        let doc = doc_with(&[("2024-03-04", 100), ("2024-03-05", 99)]);
        let today = "2024-03-31".parse().unwrap();
        let cells = calendar_cells(&doc, 2024, 3, today);

        let cell = |d: &str| {
            let date: NaiveDate = d.parse().unwrap();
            cells.iter().find(|c| c.date == date).unwrap()
        };
        assert!(cell("2024-03-04").goal_met);
        assert!(!cell("2024-03-05").goal_met);
        assert!(!cell("2024-03-06").goal_met);
    }

    #[test]
    fn invalid_month_yields_no_cells() {
        let doc = doc_with(&[]);
        let today = "2024-03-15".parse().unwrap();
        assert!(calendar_cells(&doc, 2024, 13, today).is_empty());
    }
}
