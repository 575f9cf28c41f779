use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use worktracker_core::{
    calendar_cells, day_sessions, day_total, month_summary, today_progress, Clock, Store,
    SystemClock,
};

#[derive(Subcommand)]
pub enum ReportAction {
    /// Balance and progress toward today's goal
    Today,
    /// Monthly average daily points and goals achieved
    Month {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// The six-week calendar grid for a month
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Every session of one day, with the day total
    Day {
        /// Calendar date (YYYY-MM-DD)
        date: NaiveDate,
    },
}

pub fn run(action: ReportAction) -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    let today = clock.today();
    let store = Store::open()?;
    let doc = store.load();

    match action {
        ReportAction::Today => {
            let progress = today_progress(&doc, today);
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        ReportAction::Month { year, month } => {
            let summary = month_summary(
                &doc,
                year.unwrap_or_else(|| today.year()),
                month.unwrap_or_else(|| today.month()),
            );
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        ReportAction::Calendar { year, month } => {
            let cells = calendar_cells(
                &doc,
                year.unwrap_or_else(|| today.year()),
                month.unwrap_or_else(|| today.month()),
                today,
            );
            println!("{}", serde_json::to_string_pretty(&cells)?);
        }
        ReportAction::Day { date } => {
            let detail = serde_json::json!({
                "date": date,
                "total": day_total(&doc, date),
                "sessions": day_sessions(&doc, date),
            });
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
    }
    Ok(())
}
