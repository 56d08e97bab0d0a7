//! Error types for the Docket library.

use thiserror::Error;

use crate::item::ReviewStatus;
use crate::queue::ActionKind;

/// Main error type for Docket operations.
#[derive(Debug, Error)]
pub enum DocketError {
    /// The requested action is not permitted from the item's current status.
    ///
    /// The queue is left unchanged when this is returned.
    #[error(
        "Cannot {action} item '{item_id}' while it is {current}; allowed from: {}",
        format_allowed(.allowed)
    )]
    InvalidTransition {
        item_id: String,
        current: ReviewStatus,
        action: ActionKind,
        allowed: Vec<ReviewStatus>,
    },

    /// Malformed input: empty reasons, invalid records, unknown criteria values.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No item with this id exists in the queue.
    #[error("Item '{id}' not found")]
    NotFound { id: String },

    /// An item with this id is already present.
    #[error("Duplicate item id '{id}'")]
    DuplicateId { id: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_allowed(allowed: &[ReviewStatus]) -> String {
    if allowed.is_empty() {
        return "none".to_string();
    }
    allowed
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for Docket operations.
pub type Result<T> = std::result::Result<T, DocketError>;
