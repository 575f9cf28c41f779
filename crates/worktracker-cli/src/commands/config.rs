use clap::Subcommand;
use worktracker_core::{Settings, Store};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a settings value
    Get {
        /// Settings key (e.g. "daily_goal", "time_weight")
        key: String,
    },
    /// Set a settings value
    Set {
        /// Settings key
        key: String,
        /// New value
        value: String,
    },
    /// List all settings
    List,
    /// Reset settings to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut doc = store.load();

    match action {
        ConfigAction::Get { key } => match doc.settings.get(&key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("unknown key: {key} (known: {})", Settings::keys().join(", "));
                std::process::exit(1);
            }
        },
        ConfigAction::Set { key, value } => {
            doc.settings.set(&key, &value)?;
            store.save(&doc)?;
            println!("ok");
        }
        ConfigAction::List => {
            println!("{}", serde_json::to_string_pretty(&doc.settings)?);
        }
        ConfigAction::Reset => {
            doc.settings = Settings::default();
            store.save(&doc)?;
            println!("settings reset to defaults");
        }
    }
    Ok(())
}
