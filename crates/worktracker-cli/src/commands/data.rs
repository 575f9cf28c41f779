use std::path::PathBuf;

use clap::Subcommand;
use worktracker_core::{Clock, Store, SystemClock};

use super::confirm;

#[derive(Subcommand)]
pub enum DataAction {
    /// Write a date-stamped backup of the whole document
    Export {
        /// Directory to write the backup into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Shallow-merge a backup over the current document
    Import {
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let doc = store.load();

    match action {
        DataAction::Export { dir } => {
            let path = Store::export(&doc, &dir, SystemClock.today())?;
            println!("{}", path.display());
        }
        DataAction::Import { file, yes } => {
            if !yes && !confirm("Importing replaces current data. Continue?") {
                println!("aborted");
                return Ok(());
            }
            let merged = Store::import(&doc, &file)?;
            store.save(&merged)?;
            println!("data imported");
        }
    }
    Ok(())
}
