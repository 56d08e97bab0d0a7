//! Which transitions a queue permits.

use serde::{Deserialize, Serialize};

use crate::item::ReviewStatus;

use super::action::{ActionKind, ReviewAction};

/// Configurable parts of the review state machine.
///
/// The base table is fixed; the policy only widens or narrows the two paths
/// whose intent varies between dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionPolicy {
    /// Allow rejecting an item that is already under review.
    pub reject_under_review: bool,

    /// Allow a reviewer to resubmit an item without new extracted content.
    /// When false, only extraction-driven resubmission returns an item to
    /// pending.
    pub manual_resubmit: bool,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self {
            reject_under_review: false,
            manual_resubmit: true,
        }
    }
}

impl TransitionPolicy {
    /// Strict table with no optional paths.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reject_under_review(mut self, allowed: bool) -> Self {
        self.reject_under_review = allowed;
        self
    }

    pub fn with_manual_resubmit(mut self, allowed: bool) -> Self {
        self.manual_resubmit = allowed;
        self
    }

    /// Statuses from which `action` may be applied.
    pub fn allowed_from(&self, action: &ReviewAction) -> Vec<ReviewStatus> {
        match action {
            ReviewAction::Resubmit { revision: None } if !self.manual_resubmit => Vec::new(),
            _ => self.allowed_for_kind(action.kind()),
        }
    }

    /// Statuses from which an action kind may be applied, ignoring arguments.
    pub fn allowed_for_kind(&self, kind: ActionKind) -> Vec<ReviewStatus> {
        match kind {
            ActionKind::Approve => vec![ReviewStatus::Pending, ReviewStatus::UnderReview],
            ActionKind::Reject if self.reject_under_review => {
                vec![ReviewStatus::Pending, ReviewStatus::UnderReview]
            }
            ActionKind::Reject => vec![ReviewStatus::Pending],
            ActionKind::AssignForReview => vec![ReviewStatus::Pending],
            ActionKind::Revise => vec![ReviewStatus::UnderReview],
            ActionKind::Resubmit => vec![ReviewStatus::NeedsRevision],
        }
    }

    /// Action kinds available from a status, in button order.
    pub fn available_actions(&self, status: ReviewStatus) -> Vec<ActionKind> {
        [
            ActionKind::Approve,
            ActionKind::Reject,
            ActionKind::AssignForReview,
            ActionKind::Revise,
            ActionKind::Resubmit,
        ]
        .into_iter()
        .filter(|kind| {
            if *kind == ActionKind::Resubmit && !self.manual_resubmit {
                return false;
            }
            self.allowed_for_kind(*kind).contains(&status)
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let policy = TransitionPolicy::default();

        assert_eq!(
            policy.allowed_for_kind(ActionKind::Approve),
            vec![ReviewStatus::Pending, ReviewStatus::UnderReview]
        );
        assert_eq!(
            policy.allowed_for_kind(ActionKind::Reject),
            vec![ReviewStatus::Pending]
        );
        assert_eq!(
            policy.allowed_for_kind(ActionKind::Revise),
            vec![ReviewStatus::UnderReview]
        );
    }

    #[test]
    fn test_reject_under_review_widens_reject() {
        let policy = TransitionPolicy::new().with_reject_under_review(true);
        assert!(
            policy
                .allowed_for_kind(ActionKind::Reject)
                .contains(&ReviewStatus::UnderReview)
        );
    }

    #[test]
    fn test_manual_resubmit_disabled() {
        let policy = TransitionPolicy::new().with_manual_resubmit(false);

        let manual = ReviewAction::Resubmit { revision: None };
        assert!(policy.allowed_from(&manual).is_empty());

        let extracted = ReviewAction::Resubmit {
            revision: Some(Default::default()),
        };
        assert_eq!(
            policy.allowed_from(&extracted),
            vec![ReviewStatus::NeedsRevision]
        );
    }

    #[test]
    fn test_available_actions() {
        let policy = TransitionPolicy::default();

        assert_eq!(
            policy.available_actions(ReviewStatus::Pending),
            vec![ActionKind::Approve, ActionKind::Reject, ActionKind::AssignForReview]
        );
        assert_eq!(
            policy.available_actions(ReviewStatus::UnderReview),
            vec![ActionKind::Approve, ActionKind::Revise]
        );
        assert!(policy.available_actions(ReviewStatus::Approved).is_empty());
        assert!(policy.available_actions(ReviewStatus::Rejected).is_empty());
    }

    #[test]
    fn test_policy_from_partial_json() {
        let policy: TransitionPolicy =
            serde_json::from_str(r#"{"reject_under_review": true}"#).unwrap();

        assert!(policy.reject_under_review);
        assert!(policy.manual_resubmit);
    }
}
