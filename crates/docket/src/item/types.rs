//! Enumerations describing a review item.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of document produced by the extraction process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    /// Laws, decrees, ministerial orders.
    LegalText,
    /// Administrative procedures.
    Procedure,
}

impl DocumentType {
    /// All document types, in display order.
    pub const ALL: [DocumentType; 2] = [DocumentType::LegalText, DocumentType::Procedure];

    /// Wire name (`legal-text`, `procedure`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::LegalText => "legal-text",
            DocumentType::Procedure => "procedure",
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::LegalText => "Legal text",
            DocumentType::Procedure => "Procedure",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "legal-text" | "legaltext" | "legal" => Ok(DocumentType::LegalText),
            "procedure" => Ok(DocumentType::Procedure),
            _ => Err(format!(
                "Unknown document type: {}. Use legal-text or procedure.",
                s
            )),
        }
    }
}

/// Review priority, set at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities, highest first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Wire name (`low`, `medium`, `high`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" | "normal" => Ok(Priority::Medium),
            "high" | "urgent" => Ok(Priority::High),
            _ => Err(format!("Unknown priority: {}. Use high, medium, or low.", s)),
        }
    }
}

/// Position of an item in the review lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Waiting for a reviewer.
    Pending,
    /// Assigned to a reviewer.
    UnderReview,
    /// Accepted for publication.
    Approved,
    /// Sent back for corrections.
    NeedsRevision,
    /// Refused.
    Rejected,
}

impl ReviewStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [ReviewStatus; 5] = [
        ReviewStatus::Pending,
        ReviewStatus::UnderReview,
        ReviewStatus::Approved,
        ReviewStatus::NeedsRevision,
        ReviewStatus::Rejected,
    ];

    /// Wire name (`pending`, `under_review`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::UnderReview => "under_review",
            ReviewStatus::Approved => "approved",
            ReviewStatus::NeedsRevision => "needs_revision",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::UnderReview => "Under review",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::NeedsRevision => "Needs revision",
            ReviewStatus::Rejected => "Rejected",
        }
    }

    /// Approved and rejected items are never mutated again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReviewStatus::Approved | ReviewStatus::Rejected)
    }

    /// Whether an item in this status may carry an assignee.
    pub fn allows_assignee(&self) -> bool {
        !matches!(self, ReviewStatus::Pending)
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "pending" => Ok(ReviewStatus::Pending),
            "under_review" | "in_review" => Ok(ReviewStatus::UnderReview),
            "approved" => Ok(ReviewStatus::Approved),
            "needs_revision" | "revision" => Ok(ReviewStatus::NeedsRevision),
            "rejected" => Ok(ReviewStatus::Rejected),
            _ => Err(format!(
                "Unknown status: {}. Use pending, under_review, approved, needs_revision, or rejected.",
                s
            )),
        }
    }
}
