//! Audit trail of committed transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::{ItemId, ReviewStatus};

use super::action::ActionKind;

/// One committed status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Unique identifier within the queue (`trn_001`, ...).
    pub id: String,

    /// Item that changed.
    pub item_id: ItemId,

    /// Action that caused the change.
    pub action: ActionKind,

    pub from: ReviewStatus,
    pub to: ReviewStatus,

    /// Who performed the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// Comment, reason or notes given with the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the change was committed.
    pub at: DateTime<Utc>,
}

/// Per-queue record id sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RecordIds {
    next: u64,
}

impl RecordIds {
    /// Continue numbering after `existing` records.
    pub(crate) fn after(existing: usize) -> Self {
        Self {
            next: existing as u64 + 1,
        }
    }

    /// Continue numbering after the highest `trn_NNN` id in `records`.
    ///
    /// Ids in another format do not take part in the numbering.
    pub(crate) fn resume(records: &[TransitionRecord]) -> Self {
        let highest = records
            .iter()
            .filter_map(|record| sequence_number(&record.id))
            .max()
            .unwrap_or(0);
        Self { next: highest + 1 }
    }

    pub(crate) fn next_id(&mut self) -> String {
        let id = format!("trn_{:03}", self.next);
        self.next += 1;
        id
    }
}

fn sequence_number(id: &str) -> Option<u64> {
    id.strip_prefix("trn_")?.parse().ok()
}
