use clap::Subcommand;
use uuid::Uuid;
use worktracker_core::{rewards, Clock, RewardDraft, Store, SystemClock};

use super::confirm;

#[derive(Subcommand)]
pub enum RewardAction {
    /// Create a reward
    Add {
        title: String,
        /// Point cost
        #[arg(long)]
        cost: u32,
        #[arg(long, default_value = "")]
        description: String,
        /// Optional image reference
        #[arg(long)]
        image: Option<String>,
    },
    /// Edit an active reward in place
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        cost: Option<u32>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// List rewards
    List {
        /// Show the archive instead of the active store
        #[arg(long)]
        archived: bool,
    },
    /// Move an active reward to the archive
    Archive { id: Uuid },
    /// Move an archived reward back to the store
    Unarchive { id: Uuid },
    /// Permanently delete an archived reward
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Redeem a reward for points
    Buy {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Redemption history, most recent first
    History,
}

pub fn run(action: RewardAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut doc = store.load();

    match action {
        RewardAction::Add {
            title,
            cost,
            description,
            image,
        } => {
            let id = rewards::upsert(
                &mut doc,
                RewardDraft {
                    id: None,
                    title,
                    description,
                    cost,
                    image,
                },
            );
            store.save(&doc)?;
            println!("{id}");
        }
        RewardAction::Edit {
            id,
            title,
            cost,
            description,
            image,
        } => {
            let Some(existing) = doc.rewards.iter().find(|r| r.id == id) else {
                eprintln!("no active reward with id {id}");
                std::process::exit(1);
            };
            let draft = RewardDraft {
                id: Some(id),
                title: title.unwrap_or_else(|| existing.title.clone()),
                description: description.unwrap_or_else(|| existing.description.clone()),
                cost: cost.unwrap_or(existing.cost),
                image: image.or_else(|| existing.image.clone()),
            };
            rewards::upsert(&mut doc, draft);
            store.save(&doc)?;
            println!("ok");
        }
        RewardAction::List { archived } => {
            let list = if archived {
                &doc.archived_rewards
            } else {
                &doc.rewards
            };
            println!("{}", serde_json::to_string_pretty(list)?);
        }
        RewardAction::Archive { id } => {
            rewards::archive(&mut doc, id)?;
            store.save(&doc)?;
            println!("ok");
        }
        RewardAction::Unarchive { id } => {
            rewards::unarchive(&mut doc, id)?;
            store.save(&doc)?;
            println!("ok");
        }
        RewardAction::Delete { id, yes } => {
            if !yes && !confirm("Delete this reward permanently?") {
                println!("aborted");
                return Ok(());
            }
            let removed = rewards::delete(&mut doc, id)?;
            store.save(&doc)?;
            println!("deleted '{}'", removed.title);
        }
        RewardAction::Buy { id, yes } => {
            let Some(reward) = doc.rewards.iter().find(|r| r.id == id) else {
                eprintln!("no active reward with id {id}");
                std::process::exit(1);
            };
            let prompt = format!("Redeem '{}' for {} points?", reward.title, reward.cost);
            if !yes && !confirm(&prompt) {
                println!("aborted");
                return Ok(());
            }
            let event = rewards::purchase(&mut doc, id, SystemClock.now())?;
            store.save(&doc)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        RewardAction::History => {
            println!("{}", serde_json::to_string_pretty(&rewards::history(&doc))?);
        }
    }
    Ok(())
}
