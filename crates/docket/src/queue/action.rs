//! Review actions a caller can request.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DocketError, Result};
use crate::item::{ExtractedData, ReviewStatus};

/// Kind of action, without arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Approve,
    Reject,
    AssignForReview,
    Revise,
    Resubmit,
}

impl ActionKind {
    /// Status an item lands in after this action.
    pub fn target(&self) -> ReviewStatus {
        match self {
            ActionKind::Approve => ReviewStatus::Approved,
            ActionKind::Reject => ReviewStatus::Rejected,
            ActionKind::AssignForReview => ReviewStatus::UnderReview,
            ActionKind::Revise => ReviewStatus::NeedsRevision,
            ActionKind::Resubmit => ReviewStatus::Pending,
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Approve => "Approve",
            ActionKind::Reject => "Reject",
            ActionKind::AssignForReview => "Assign for review",
            ActionKind::Revise => "Request revision",
            ActionKind::Resubmit => "Resubmit",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            ActionKind::Approve => "approve",
            ActionKind::Reject => "reject",
            ActionKind::AssignForReview => "assign for review",
            ActionKind::Revise => "revise",
            ActionKind::Resubmit => "resubmit",
        };
        f.write_str(verb)
    }
}

/// Re-extracted content delivered with an extraction-driven resubmission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_confidence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ExtractedData>,
}

impl Revision {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.extraction_confidence = Some(confidence);
        self
    }

    pub fn with_extraction_date(mut self, date: NaiveDate) -> Self {
        self.extraction_date = Some(date);
        self
    }

    pub fn with_payload(mut self, payload: ExtractedData) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// A requested action together with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    Approve { comment: Option<String> },
    Reject { reason: String },
    AssignForReview { reviewer: String },
    Revise { notes: String },
    /// `revision` is `None` for a reviewer-triggered resubmission.
    Resubmit { revision: Option<Revision> },
}

impl ReviewAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            ReviewAction::Approve { .. } => ActionKind::Approve,
            ReviewAction::Reject { .. } => ActionKind::Reject,
            ReviewAction::AssignForReview { .. } => ActionKind::AssignForReview,
            ReviewAction::Revise { .. } => ActionKind::Revise,
            ReviewAction::Resubmit { .. } => ActionKind::Resubmit,
        }
    }

    /// Free text attached to the action, recorded in history.
    pub fn note(&self) -> Option<&str> {
        match self {
            ReviewAction::Approve { comment } => comment.as_deref(),
            ReviewAction::Reject { reason } => Some(reason.as_str()),
            ReviewAction::Revise { notes } => Some(notes.as_str()),
            ReviewAction::AssignForReview { .. } | ReviewAction::Resubmit { .. } => None,
        }
    }

    /// Check arguments that do not depend on the item.
    pub fn validate(&self) -> Result<()> {
        match self {
            ReviewAction::Reject { reason } if reason.trim().is_empty() => Err(
                DocketError::Validation("A rejection reason is required".to_string()),
            ),
            ReviewAction::AssignForReview { reviewer } if reviewer.trim().is_empty() => Err(
                DocketError::Validation("A reviewer is required".to_string()),
            ),
            ReviewAction::Revise { notes } if notes.trim().is_empty() => Err(
                DocketError::Validation("Revision notes are required".to_string()),
            ),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_targets() {
        assert_eq!(ActionKind::Approve.target(), ReviewStatus::Approved);
        assert_eq!(ActionKind::AssignForReview.target(), ReviewStatus::UnderReview);
        assert_eq!(ActionKind::Resubmit.target(), ReviewStatus::Pending);
    }

    #[test]
    fn test_blank_reason_is_invalid() {
        let action = ReviewAction::Reject {
            reason: "  ".to_string(),
        };
        assert!(matches!(action.validate(), Err(DocketError::Validation(_))));
    }

    #[test]
    fn test_approve_without_comment_is_valid() {
        let action = ReviewAction::Approve { comment: None };
        assert!(action.validate().is_ok());
        assert_eq!(action.note(), None);
    }

    #[test]
    fn test_note_carries_reason() {
        let action = ReviewAction::Reject {
            reason: "Motif à préciser".to_string(),
        };
        assert_eq!(action.note(), Some("Motif à préciser"));
        assert_eq!(action.kind(), ActionKind::Reject);
    }
}
