//! Reward ledger: the point store.
//!
//! Rewards live in exactly one of two ordered collections, active or
//! archived. Archiving moves a reward to the end of the other
//! collection; deletion is only allowed from the archive. Purchasing is
//! the single operation that ever decreases the point balance, and every
//! purchase leaves a snapshot in the redemption history.
//!
//! All operations reject invalid identifiers without touching the
//! document.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::RewardError;
use crate::events::Event;
use crate::storage::{Document, Redemption, Reward};

/// User-supplied fields for creating or editing a reward.
#[derive(Debug, Clone)]
pub struct RewardDraft {
    /// `Some` to edit an existing active reward in place.
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub cost: u32,
    pub image: Option<String>,
}

/// Create a reward, or replace an existing active one in place (position
/// preserved). A draft with no id, or an id that matches no active
/// reward, is appended as new under a fresh identifier. Returns the id
/// the reward ended up with.
pub fn upsert(doc: &mut Document, draft: RewardDraft) -> Uuid {
    if let Some(id) = draft.id {
        if let Some(existing) = doc.rewards.iter_mut().find(|r| r.id == id) {
            existing.title = draft.title;
            existing.description = draft.description;
            existing.cost = draft.cost;
            existing.image = draft.image;
            return id;
        }
    }
    let id = Uuid::new_v4();
    doc.rewards.push(Reward {
        id,
        title: draft.title,
        description: draft.description,
        cost: draft.cost,
        image: draft.image,
    });
    id
}

/// Move an active reward to the end of the archived collection.
///
/// # Errors
///
/// Returns an error if no active reward has the id.
pub fn archive(doc: &mut Document, id: Uuid) -> Result<(), RewardError> {
    let index = doc
        .rewards
        .iter()
        .position(|r| r.id == id)
        .ok_or(RewardError::NotFoundActive { id })?;
    let reward = doc.rewards.remove(index);
    doc.archived_rewards.push(reward);
    Ok(())
}

/// Move an archived reward back to the end of the active collection.
///
/// # Errors
///
/// Returns an error if no archived reward has the id.
pub fn unarchive(doc: &mut Document, id: Uuid) -> Result<(), RewardError> {
    let index = doc
        .archived_rewards
        .iter()
        .position(|r| r.id == id)
        .ok_or(RewardError::NotFoundArchived { id })?;
    let reward = doc.archived_rewards.remove(index);
    doc.rewards.push(reward);
    Ok(())
}

/// Permanently remove an archived reward, returning it.
///
/// # Errors
///
/// Returns an error if the reward is still active (archive first) or
/// unknown.
pub fn delete(doc: &mut Document, id: Uuid) -> Result<Reward, RewardError> {
    if doc.rewards.iter().any(|r| r.id == id) {
        return Err(RewardError::StillActive { id });
    }
    let index = doc
        .archived_rewards
        .iter()
        .position(|r| r.id == id)
        .ok_or(RewardError::NotFoundArchived { id })?;
    Ok(doc.archived_rewards.remove(index))
}

/// Redeem an active reward: deduct its cost from the balance and append
/// a snapshot to the redemption history.
///
/// # Errors
///
/// Returns an error if no active reward has the id or the balance does
/// not cover the cost. The document is untouched on failure.
pub fn purchase(doc: &mut Document, id: Uuid, now: DateTime<Utc>) -> Result<Event, RewardError> {
    let reward = doc
        .rewards
        .iter()
        .find(|r| r.id == id)
        .ok_or(RewardError::NotFoundActive { id })?;
    if doc.total_points < i64::from(reward.cost) {
        return Err(RewardError::InsufficientPoints {
            cost: reward.cost,
            balance: doc.total_points,
        });
    }

    let snapshot = reward.clone();
    doc.total_points -= i64::from(snapshot.cost);
    doc.reward_history.push(Redemption {
        reward: snapshot.clone(),
        redeemed_at: now,
    });
    Ok(Event::RewardPurchased {
        id,
        title: snapshot.title,
        cost: snapshot.cost,
        balance: doc.total_points,
        at: now,
    })
}

/// Redemptions, most recent first.
pub fn history(doc: &Document) -> Vec<&Redemption> {
    let mut redemptions: Vec<&Redemption> = doc.reward_history.iter().collect();
    redemptions.sort_by(|a, b| b.redeemed_at.cmp(&a.redeemed_at));
    redemptions
}
