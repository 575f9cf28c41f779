use chrono::NaiveDate;
use clap::Subcommand;
use worktracker_core::{day_sessions, Store};

#[derive(Subcommand)]
pub enum SessionAction {
    /// List recorded sessions, optionally for a single date
    List {
        /// Restrict to one calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let doc = store.load();

    match action {
        SessionAction::List { date } => match date {
            Some(date) => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&day_sessions(&doc, date))?
                );
            }
            None => println!("{}", serde_json::to_string_pretty(&doc.cycles)?),
        },
    }
    Ok(())
}
