//! The unit under review.

use std::borrow::Borrow;
use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DocketError, Result};

use super::payload::ExtractedData;
use super::types::{DocumentType, Priority, ReviewStatus};

/// Highest valid extraction confidence score.
pub const MAX_CONFIDENCE: u8 = 100;

/// Unique, immutable identifier of a review item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A machine-extracted document waiting in the review queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    /// Unique identifier, assigned by the extraction process.
    pub id: ItemId,

    /// Display title.
    pub title: String,

    /// Day the extraction produced this item.
    pub extraction_date: NaiveDate,

    /// Day the item entered the queue.
    pub submitted_date: NaiveDate,

    /// Extraction quality score (0-100).
    pub extraction_confidence: u8,

    /// Current lifecycle status.
    pub status: ReviewStatus,

    /// Who submitted the item (a person or an automated system).
    pub submitted_by: String,

    /// Reviewer in charge, never set while pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    /// Review priority.
    pub priority: Priority,

    /// Free-form classification used for filtering.
    pub category: String,

    /// Extracted structured content.
    pub payload: ExtractedData,
}

impl ReviewItem {
    /// Create a new pending item extracted today.
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, payload: ExtractedData) -> Self {
        let today = Utc::now().date_naive();
        Self {
            id: id.into(),
            title: title.into(),
            extraction_date: today,
            submitted_date: today,
            extraction_confidence: 0,
            status: ReviewStatus::Pending,
            submitted_by: String::new(),
            assigned_to: None,
            priority: Priority::Medium,
            category: String::new(),
            payload,
        }
    }

    /// Set the extraction date. The submission date follows it.
    pub fn with_extraction_date(mut self, date: NaiveDate) -> Self {
        self.extraction_date = date;
        self.submitted_date = date;
        self
    }

    /// Set the submission date.
    pub fn with_submitted_date(mut self, date: NaiveDate) -> Self {
        self.submitted_date = date;
        self
    }

    /// Set the extraction confidence.
    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.extraction_confidence = confidence;
        self
    }

    /// Set the submitter.
    pub fn with_submitted_by(mut self, by: impl Into<String>) -> Self {
        self.submitted_by = by.into();
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set status and assignee together, for loading existing records.
    pub fn with_status(mut self, status: ReviewStatus, assigned_to: Option<&str>) -> Self {
        self.status = status;
        self.assigned_to = assigned_to.map(str::to_string);
        self
    }

    /// Document type, derived from the payload.
    pub fn document_type(&self) -> DocumentType {
        self.payload.document_type()
    }

    /// Check the record invariants.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DocketError::Validation("Item id must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(DocketError::Validation(format!(
                "Item '{}' has an empty title",
                self.id
            )));
        }
        if self.extraction_confidence > MAX_CONFIDENCE {
            return Err(DocketError::Validation(format!(
                "Item '{}' has confidence {} outside 0-{}",
                self.id, self.extraction_confidence, MAX_CONFIDENCE
            )));
        }
        if self.assigned_to.is_some() && !self.status.allows_assignee() {
            return Err(DocketError::Validation(format!(
                "Item '{}' is {} but assigned to a reviewer",
                self.id, self.status
            )));
        }
        Ok(())
    }
}
