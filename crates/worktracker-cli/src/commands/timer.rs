use clap::Subcommand;
use worktracker_core::timer::PRESET_MINUTES;
use worktracker_core::{
    record_session, SessionInput, Store, SystemClock, TimerEngine, TimerState,
};

const ENGINE_FILE: &str = "timer.json";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Configure the session length in minutes (1-180, idle only)
    Set {
        /// Desired duration in minutes
        minutes: u32,
    },
    /// List the preset session lengths
    Presets,
    /// Start a work session
    Start,
    /// Print the current timer state as JSON
    Status,
    /// Follow the running session at one-second cadence until it completes
    Watch,
    /// Discard the running session without recording anything
    Cancel,
    /// End the running session, score it, and record it
    Finish {
        /// Session title (required, non-empty)
        #[arg(long)]
        title: String,
        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
        /// Self-rating, 1-5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
}

fn engine_path() -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    Ok(worktracker_core::data_dir()?.join(ENGINE_FILE))
}

/// The engine is persisted between invocations so a session can span
/// several CLI calls.
fn load_engine() -> TimerEngine {
    if let Ok(path) = engine_path() {
        if let Ok(json) = std::fs::read_to_string(path) {
            if let Ok(engine) = serde_json::from_str::<TimerEngine>(&json) {
                return engine;
            }
        }
    }
    TimerEngine::new()
}

fn save_engine(engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    std::fs::write(engine_path()?, json)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    let mut engine = load_engine();

    match action {
        TimerAction::Set { minutes } => {
            // Out-of-range or mid-run values are ignored, not errors.
            engine.set_duration(minutes);
            println!(
                "{}",
                serde_json::to_string_pretty(&engine.snapshot(&clock))?
            );
        }
        TimerAction::Presets => {
            println!("{}", serde_json::to_string_pretty(&PRESET_MINUTES)?);
        }
        TimerAction::Start => match engine.start(&clock) {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&engine.snapshot(&clock))?
                );
            }
        },
        TimerAction::Status => {
            let completed = engine.tick(&clock);
            println!(
                "{}",
                serde_json::to_string_pretty(&engine.snapshot(&clock))?
            );
            if let Some(event) = completed {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Watch => {
            if engine.state() != TimerState::Running {
                eprintln!("timer is not running");
            } else {
                loop {
                    if let Some(event) = engine.tick(&clock) {
                        println!("{}", serde_json::to_string_pretty(&event)?);
                        break;
                    }
                    let remaining = engine.remaining_secs(&clock);
                    println!("{:02}:{:02}", remaining / 60, remaining % 60);
                    std::thread::sleep(std::time::Duration::from_secs(1));
                }
            }
        }
        TimerAction::Cancel => {
            engine.stop(false, &clock);
            println!("session discarded");
        }
        TimerAction::Finish {
            title,
            description,
            rating,
        } => {
            if title.trim().is_empty() {
                eprintln!("title must not be empty; session left running");
                std::process::exit(1);
            }
            match engine.stop(true, &clock) {
                Some(work_minutes) => {
                    let store = Store::open()?;
                    let mut doc = store.load();
                    let outcome = record_session(
                        &mut doc,
                        SessionInput {
                            title,
                            description,
                            rating,
                            work_minutes,
                        },
                        &clock,
                    )?;
                    store.save(&doc)?;
                    for event in &outcome.events {
                        println!("{}", serde_json::to_string_pretty(event)?);
                    }
                }
                None => eprintln!("no elapsed time to record; nothing saved"),
            }
        }
    }

    save_engine(&engine)?;
    Ok(())
}
