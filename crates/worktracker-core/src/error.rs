//! Core error types for worktracker-core.
//!
//! All errors are local and recoverable: a failed load degrades to the
//! default document, and a rejected operation leaves state untouched.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for worktracker-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence errors
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Input validation errors
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reward ledger errors
    #[error("reward error: {0}")]
    Reward(#[from] RewardError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Data directory could not be resolved or created
    #[error("data directory unavailable: {0}")]
    DataDir(String),

    /// Failed to read a document file
    #[error("failed to read {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Failed to write a document file
    #[error("failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// Document content is not valid JSON or has the wrong shape
    #[error("failed to parse document: {0}")]
    ParseFailed(String),
}

/// Input validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A session must be titled before it is recorded
    #[error("session title must not be empty")]
    EmptyTitle,

    /// Self-rating outside the 1-5 scale
    #[error("rating must be between 1 and 5, got {rating}")]
    RatingOutOfRange { rating: u8 },

    /// Invalid value for a settings field
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Unknown settings key
    #[error("unknown settings key: {0}")]
    UnknownKey(String),
}

/// Reward ledger errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RewardError {
    /// No active reward with the given id
    #[error("no active reward with id {id}")]
    NotFoundActive { id: Uuid },

    /// No archived reward with the given id
    #[error("no archived reward with id {id}")]
    NotFoundArchived { id: Uuid },

    /// Active rewards must be archived before deletion
    #[error("reward {id} is active; archive it before deleting")]
    StillActive { id: Uuid },

    /// Purchase exceeds the current point balance
    #[error("insufficient points: need {cost}, have {balance}")]
    InsufficientPoints { cost: u32, balance: i64 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
