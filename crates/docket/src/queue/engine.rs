//! The review queue: owns items and commits transitions.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{DocketError, Result};
use crate::item::{ItemId, ReviewItem, ReviewStatus};
use crate::stats::Statistics;

use super::action::{ReviewAction, Revision};
use super::history::{RecordIds, TransitionRecord};
use super::observer::ReviewObserver;
use super::policy::TransitionPolicy;
use super::transition;

/// Serializable state of a queue, for external persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    /// Items in queue order.
    pub items: Vec<ReviewItem>,

    /// Committed transitions, oldest first.
    #[serde(default)]
    pub history: Vec<TransitionRecord>,
}

/// A set of review items and the state machine that moves them.
///
/// Every mutation goes through [`transition::apply`]: the successor item is
/// computed and validated before it replaces the stored one, and observers
/// run only after the commit.
pub struct ReviewQueue {
    items: Vec<ReviewItem>,
    index: HashMap<ItemId, usize>,
    policy: TransitionPolicy,
    history: Vec<TransitionRecord>,
    ids: RecordIds,
    observers: Vec<Box<dyn ReviewObserver>>,
}

impl fmt::Debug for ReviewQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewQueue")
            .field("items", &self.items.len())
            .field("policy", &self.policy)
            .field("history", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for ReviewQueue {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            policy: TransitionPolicy::default(),
            history: Vec::new(),
            ids: RecordIds::after(0),
            observers: Vec::new(),
        }
    }
}

impl ReviewQueue {
    /// Load an existing set of items in any status.
    ///
    /// Fails without building a queue if any record is invalid or two
    /// records share an id.
    pub fn new(items: Vec<ReviewItem>) -> Result<Self> {
        let index = build_index(&items)?;
        debug!(items = items.len(), "Loaded review queue");

        Ok(Self {
            items,
            index,
            ..Self::default()
        })
    }

    /// Replace the transition policy.
    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Restore a queue from a snapshot, continuing its history numbering.
    pub fn from_snapshot(snapshot: QueueSnapshot) -> Result<Self> {
        let index = build_index(&snapshot.items)?;

        let mut record_ids = HashSet::new();
        for record in &snapshot.history {
            if !record_ids.insert(record.id.as_str()) {
                return Err(DocketError::Validation(format!(
                    "Duplicate history record id '{}'",
                    record.id
                )));
            }
            if !index.contains_key(&record.item_id) {
                return Err(DocketError::Validation(format!(
                    "History record '{}' refers to unknown item '{}'",
                    record.id, record.item_id
                )));
            }
        }

        Ok(Self {
            ids: RecordIds::resume(&snapshot.history),
            items: snapshot.items,
            index,
            history: snapshot.history,
            ..Self::default()
        })
    }

    /// Copy the queue state for persistence.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            items: self.items.clone(),
            history: self.history.clone(),
        }
    }

    /// Add a freshly extracted item.
    pub fn enqueue(&mut self, item: ReviewItem) -> Result<()> {
        if item.status != ReviewStatus::Pending {
            return Err(DocketError::Validation(format!(
                "New item '{}' must be pending, not {}",
                item.id, item.status
            )));
        }
        item.validate()?;
        if self.index.contains_key(&item.id) {
            return Err(DocketError::DuplicateId {
                id: item.id.to_string(),
            });
        }

        info!(item = %item.id, "Enqueued item for review");
        self.index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Add several items, stopping at the first rejected one.
    ///
    /// Items before the failing one stay enqueued.
    pub fn enqueue_all<I>(&mut self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = ReviewItem>,
    {
        let mut added = 0;
        for item in items {
            self.enqueue(item)?;
            added += 1;
        }
        Ok(added)
    }

    /// Register an observer for committed changes.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: ReviewObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Approve an item.
    pub fn approve(&mut self, id: &str, comment: Option<&str>) -> Result<&ReviewItem> {
        self.perform(
            id,
            ReviewAction::Approve {
                comment: comment.map(str::to_string),
            },
            None,
        )
    }

    /// Approve an item on behalf of a reviewer.
    pub fn approve_by(
        &mut self,
        id: &str,
        reviewer: &str,
        comment: Option<&str>,
    ) -> Result<&ReviewItem> {
        self.perform(
            id,
            ReviewAction::Approve {
                comment: comment.map(str::to_string),
            },
            Some(reviewer),
        )
    }

    /// Reject an item. The reason must not be blank.
    pub fn reject(&mut self, id: &str, reason: &str) -> Result<&ReviewItem> {
        self.perform(
            id,
            ReviewAction::Reject {
                reason: reason.to_string(),
            },
            None,
        )
    }

    /// Reject an item on behalf of a reviewer.
    pub fn reject_by(&mut self, id: &str, reviewer: &str, reason: &str) -> Result<&ReviewItem> {
        self.perform(
            id,
            ReviewAction::Reject {
                reason: reason.to_string(),
            },
            Some(reviewer),
        )
    }

    /// Put a pending item under review by `reviewer`.
    pub fn assign_for_review(&mut self, id: &str, reviewer: &str) -> Result<&ReviewItem> {
        self.perform(
            id,
            ReviewAction::AssignForReview {
                reviewer: reviewer.to_string(),
            },
            Some(reviewer),
        )
    }

    /// Send an item under review back for corrections.
    pub fn revise(&mut self, id: &str, notes: &str) -> Result<&ReviewItem> {
        self.perform(
            id,
            ReviewAction::Revise {
                notes: notes.to_string(),
            },
            None,
        )
    }

    /// Return a revised item to pending without new content.
    pub fn resubmit(&mut self, id: &str) -> Result<&ReviewItem> {
        self.perform(id, ReviewAction::Resubmit { revision: None }, None)
    }

    /// Return a revised item to pending with re-extracted content.
    pub fn resubmit_revised(&mut self, id: &str, revision: Revision) -> Result<&ReviewItem> {
        self.perform(
            id,
            ReviewAction::Resubmit {
                revision: Some(revision),
            },
            None,
        )
    }

    /// Apply any action, committing on success.
    pub fn perform(
        &mut self,
        id: &str,
        action: ReviewAction,
        actor: Option<&str>,
    ) -> Result<&ReviewItem> {
        let position = self.position(id)?;
        let outcome = transition::apply(&self.items[position], &action, actor, &self.policy)?;

        let record = TransitionRecord {
            id: self.ids.next_id(),
            item_id: outcome.item.id.clone(),
            action: action.kind(),
            from: outcome.from,
            to: outcome.to,
            actor: actor.map(str::to_string),
            note: action.note().map(str::to_string),
            at: Utc::now(),
        };

        self.items[position] = outcome.item;
        info!(
            item = %record.item_id,
            action = %record.action,
            from = %record.from,
            to = %record.to,
            "Committed transition"
        );

        let item = &self.items[position];
        for observer in &self.observers {
            match &action {
                ReviewAction::Approve { comment } => observer.on_approve(item, comment.as_deref()),
                ReviewAction::Reject { reason } => observer.on_reject(item, reason),
                ReviewAction::Revise { notes } => observer.on_revision(item, notes),
                ReviewAction::AssignForReview { .. } | ReviewAction::Resubmit { .. } => {}
            }
            observer.on_transition(&record, item);
        }
        self.history.push(record);

        Ok(&self.items[position])
    }

    /// Open an item's detail view.
    pub fn view(&self, id: &str) -> Result<&ReviewItem> {
        let item = &self.items[self.position(id)?];
        for observer in &self.observers {
            observer.on_view_detail(item);
        }
        Ok(item)
    }

    pub fn get(&self, id: &str) -> Option<&ReviewItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All items in queue order.
    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items still waiting for a first decision.
    pub fn pending_items(&self) -> Vec<&ReviewItem> {
        self.items
            .iter()
            .filter(|item| item.status == ReviewStatus::Pending)
            .collect()
    }

    pub fn policy(&self) -> &TransitionPolicy {
        &self.policy
    }

    /// Every committed transition, oldest first.
    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    /// Transitions of one item, oldest first.
    pub fn history_for(&self, id: &str) -> Vec<&TransitionRecord> {
        self.history
            .iter()
            .filter(|record| record.item_id.as_str() == id)
            .collect()
    }

    /// Status counts over the whole queue.
    pub fn statistics(&self) -> Statistics {
        Statistics::aggregate(&self.items)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| DocketError::NotFound { id: id.to_string() })
    }
}

fn build_index(items: &[ReviewItem]) -> Result<HashMap<ItemId, usize>> {
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        item.validate()?;
        if index.insert(item.id.clone(), position).is_some() {
            return Err(DocketError::DuplicateId {
                id: item.id.to_string(),
            });
        }
    }
    Ok(index)
}
