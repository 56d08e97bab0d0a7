//! Callbacks the queue invokes after committing a change.
//!
//! Observers are fire-and-forget: the queue neither waits for a result nor
//! retries. Persistence and notification live behind this trait.

use std::cell::RefCell;
use std::rc::Rc;

use crate::item::{ItemId, ReviewItem};

use super::history::TransitionRecord;

/// Receiver of review events. Every method defaults to a no-op.
pub trait ReviewObserver {
    /// An item was approved.
    fn on_approve(&self, _item: &ReviewItem, _comment: Option<&str>) {}

    /// An item was rejected.
    fn on_reject(&self, _item: &ReviewItem, _reason: &str) {}

    /// An item under review was sent back for corrections.
    fn on_revision(&self, _item: &ReviewItem, _notes: &str) {}

    /// A caller opened an item's detail view.
    fn on_view_detail(&self, _item: &ReviewItem) {}

    /// Any transition was committed. Called after the specific callback.
    fn on_transition(&self, _record: &TransitionRecord, _item: &ReviewItem) {}
}

/// A single observed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Approved {
        item_id: ItemId,
        comment: Option<String>,
    },
    Rejected {
        item_id: ItemId,
        reason: String,
    },
    RevisionRequested {
        item_id: ItemId,
        notes: String,
    },
    Viewed {
        item_id: ItemId,
    },
    Transitioned {
        record_id: String,
    },
}

/// Observer that keeps every notification for later inspection.
///
/// Clones share the same buffer, so a handle can be kept after the observer
/// is handed to a queue.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every notification received so far.
    pub fn events(&self) -> Vec<Notification> {
        self.events.borrow().clone()
    }

    /// Notifications of the approve/reject/revise/view kinds only.
    pub fn callbacks(&self) -> Vec<Notification> {
        self.events
            .borrow()
            .iter()
            .filter(|n| !matches!(n, Notification::Transitioned { .. }))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, notification: Notification) {
        self.events.borrow_mut().push(notification);
    }
}

impl ReviewObserver for RecordingObserver {
    fn on_approve(&self, item: &ReviewItem, comment: Option<&str>) {
        self.push(Notification::Approved {
            item_id: item.id.clone(),
            comment: comment.map(str::to_string),
        });
    }

    fn on_reject(&self, item: &ReviewItem, reason: &str) {
        self.push(Notification::Rejected {
            item_id: item.id.clone(),
            reason: reason.to_string(),
        });
    }

    fn on_revision(&self, item: &ReviewItem, notes: &str) {
        self.push(Notification::RevisionRequested {
            item_id: item.id.clone(),
            notes: notes.to_string(),
        });
    }

    fn on_view_detail(&self, item: &ReviewItem) {
        self.push(Notification::Viewed {
            item_id: item.id.clone(),
        });
    }

    fn on_transition(&self, record: &TransitionRecord, _item: &ReviewItem) {
        self.push(Notification::Transitioned {
            record_id: record.id.clone(),
        });
    }
}
