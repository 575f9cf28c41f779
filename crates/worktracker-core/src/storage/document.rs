//! The persisted aggregate state document.
//!
//! One JSON object holds everything: settings, the session history, the
//! two reward collections, the redemption history, and the running point
//! balance. Field names follow the on-disk camelCase schema. Every field
//! carries a serde default, so a partially-present document (top level or
//! inside `settings`) is filled out field-by-field on load.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StoreError, ValidationError};

/// On-disk schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// User-tunable settings. The two colors are display-only and carried
/// verbatim for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    /// Daily point goal; reaching it awards the one-per-day bonus.
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,
    /// Bonus points awarded when the daily goal is first met.
    #[serde(default = "default_goal_bonus")]
    pub goal_bonus: u32,
    /// Points per worked minute.
    #[serde(default = "default_time_weight")]
    pub time_weight: f64,
    /// Points per rating unit.
    #[serde(default = "default_performance_weight")]
    pub performance_weight: u32,
}

fn default_accent_color() -> String {
    "#00d4ff".into()
}
fn default_secondary_color() -> String {
    "#0099cc".into()
}
fn default_daily_goal() -> u32 {
    1000
}
fn default_goal_bonus() -> u32 {
    50
}
fn default_time_weight() -> f64 {
    2.0
}
fn default_performance_weight() -> u32 {
    20
}
fn default_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            secondary_color: default_secondary_color(),
            daily_goal: default_daily_goal(),
            goal_bonus: default_goal_bonus(),
            time_weight: default_time_weight(),
            performance_weight: default_performance_weight(),
        }
    }
}

impl Settings {
    /// Get a settings value as a string by flat key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "accent_color" => Some(self.accent_color.clone()),
            "secondary_color" => Some(self.secondary_color.clone()),
            "daily_goal" => Some(self.daily_goal.to_string()),
            "goal_bonus" => Some(self.goal_bonus.to_string()),
            "time_weight" => Some(self.time_weight.to_string()),
            "performance_weight" => Some(self.performance_weight.to_string()),
            _ => None,
        }
    }

    /// Set a settings value by flat key, parsing and validating the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value fails to parse
    /// or violates the field's range (`daily_goal` must be positive,
    /// `time_weight` non-negative).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ValidationError> {
        let invalid = |message: &str| ValidationError::InvalidValue {
            field: key.to_string(),
            message: message.to_string(),
        };
        match key {
            "accent_color" => self.accent_color = value.to_string(),
            "secondary_color" => self.secondary_color = value.to_string(),
            "daily_goal" => {
                let goal: u32 = value.parse().map_err(|_| invalid("expected an integer"))?;
                if goal == 0 {
                    return Err(invalid("daily goal must be positive"));
                }
                self.daily_goal = goal;
            }
            "goal_bonus" => {
                self.goal_bonus = value.parse().map_err(|_| invalid("expected an integer"))?;
            }
            "time_weight" => {
                let weight: f64 = value.parse().map_err(|_| invalid("expected a number"))?;
                if !weight.is_finite() || weight < 0.0 {
                    return Err(invalid("time weight must be a non-negative number"));
                }
                self.time_weight = weight;
            }
            "performance_weight" => {
                self.performance_weight =
                    value.parse().map_err(|_| invalid("expected an integer"))?;
            }
            _ => return Err(ValidationError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// All known settings keys, for listings and completions.
    pub fn keys() -> &'static [&'static str] {
        &[
            "accent_color",
            "secondary_color",
            "daily_goal",
            "goal_bonus",
            "time_weight",
            "performance_weight",
        ]
    }
}

/// One committed work session. Immutable once appended to the history,
/// except that the scoring engine may attach the daily goal bonus to the
/// record that first meets the goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Creation timestamp in epoch milliseconds; doubles as the identifier.
    pub id: i64,
    /// Local calendar date the session ended on.
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Self-rating, 1-5.
    pub rating: u8,
    pub work_minutes: u32,
    pub points: i64,
    /// Present on at most one record per calendar date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_bonus: Option<u32>,
    pub timestamp: DateTime<Utc>,
}

impl SessionRecord {
    /// Points plus any attached goal bonus.
    pub fn total(&self) -> i64 {
        self.points + self.goal_bonus.map_or(0, i64::from)
    }
}

/// A point-redeemable item. Lives in exactly one of the active or
/// archived collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Snapshot of a reward at the moment it was purchased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    #[serde(flatten)]
    pub reward: Reward,
    pub redeemed_at: DateTime<Utc>,
}

/// The complete aggregate state.
///
/// Invariant: `total_points` equals the sum of all session points and
/// bonuses ever awarded minus the sum of all redemption costs ever spent.
/// The scoring engine and the reward ledger maintain this incrementally;
/// it is never recomputed from history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub cycles: Vec<SessionRecord>,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    #[serde(default)]
    pub archived_rewards: Vec<Reward>,
    #[serde(default)]
    pub reward_history: Vec<Redemption>,
    #[serde(default)]
    pub total_points: i64,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            settings: Settings::default(),
            cycles: Vec::new(),
            rewards: Vec::new(),
            archived_rewards: Vec::new(),
            reward_history: Vec::new(),
            total_points: 0,
        }
    }
}

impl Document {
    /// Session records dated on the given local calendar date, in append
    /// order.
    pub fn sessions_on(&self, date: NaiveDate) -> impl Iterator<Item = &SessionRecord> + '_ {
        self.cycles.iter().filter(move |c| c.date == date)
    }

    /// Overlay the top-level keys of `incoming` over this document and
    /// reparse. Keys absent from `incoming` keep their current values;
    /// nested objects are replaced wholesale (with missing fields filled
    /// by the schema defaults), matching the import semantics of the
    /// on-disk format.
    ///
    /// # Errors
    ///
    /// Returns an error if `incoming` is not a JSON object or the merged
    /// result does not deserialize as a document.
    pub fn merge_shallow(&self, incoming: serde_json::Value) -> Result<Document, StoreError> {
        let serde_json::Value::Object(incoming) = incoming else {
            return Err(StoreError::ParseFailed(
                "expected a top-level JSON object".into(),
            ));
        };
        let mut merged = match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return Err(StoreError::ParseFailed("document is not an object".into())),
        };
        for (key, value) in incoming {
            merged.insert(key, value);
        }
        serde_json::from_value(serde_json::Value::Object(merged))
            .map_err(|e| StoreError::ParseFailed(e.to_string()))
    }
}
