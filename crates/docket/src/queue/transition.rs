//! Pure transition function.
//!
//! [`apply`] computes the successor of an item without touching any queue.
//! Callers commit the returned item; on error nothing has changed.

use crate::error::{DocketError, Result};
use crate::item::{ReviewItem, ReviewStatus};

use super::action::ReviewAction;
use super::policy::TransitionPolicy;

/// A successor item ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub item: ReviewItem,
    pub from: ReviewStatus,
    pub to: ReviewStatus,
}

/// Compute the item that results from applying `action` to `item`.
///
/// `actor` is who performed the action; approving or rejecting an unassigned
/// item records the actor as its reviewer.
pub fn apply(
    item: &ReviewItem,
    action: &ReviewAction,
    actor: Option<&str>,
    policy: &TransitionPolicy,
) -> Result<TransitionOutcome> {
    let allowed = policy.allowed_from(action);
    if !allowed.contains(&item.status) {
        return Err(DocketError::InvalidTransition {
            item_id: item.id.to_string(),
            current: item.status,
            action: action.kind(),
            allowed,
        });
    }
    action.validate()?;

    let mut next = item.clone();
    next.status = action.kind().target();

    match action {
        ReviewAction::Approve { .. } | ReviewAction::Reject { .. } => {
            if next.assigned_to.is_none() {
                next.assigned_to = actor.map(str::to_string);
            }
        }
        ReviewAction::AssignForReview { reviewer } => {
            next.assigned_to = Some(reviewer.trim().to_string());
        }
        ReviewAction::Revise { .. } => {}
        ReviewAction::Resubmit { revision } => {
            next.assigned_to = None;
            if let Some(revision) = revision {
                if let Some(title) = &revision.title {
                    next.title = title.clone();
                }
                if let Some(confidence) = revision.extraction_confidence {
                    next.extraction_confidence = confidence;
                }
                if let Some(date) = revision.extraction_date {
                    next.extraction_date = date;
                }
                if let Some(payload) = &revision.payload {
                    next.payload = payload.clone();
                }
            }
        }
    }

    next.validate()?;

    Ok(TransitionOutcome {
        from: item.status,
        to: next.status,
        item: next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ExtractedData;
    use crate::queue::action::{ActionKind, Revision};

    fn pending() -> ReviewItem {
        ReviewItem::new("1", "Loi relative aux investissements", ExtractedData::legal_text("Loi", "Finance"))
            .with_confidence(94)
    }

    fn under_review() -> ReviewItem {
        pending().with_status(ReviewStatus::UnderReview, Some("Dr. Amina Khelifi"))
    }

    #[test]
    fn test_approve_pending() {
        let item = pending();
        let outcome = apply(
            &item,
            &ReviewAction::Approve { comment: None },
            None,
            &TransitionPolicy::default(),
        )
        .unwrap();

        assert_eq!(outcome.from, ReviewStatus::Pending);
        assert_eq!(outcome.to, ReviewStatus::Approved);
        assert_eq!(outcome.item.status, ReviewStatus::Approved);
        assert_eq!(item.status, ReviewStatus::Pending);
    }

    #[test]
    fn test_approve_by_actor_records_reviewer() {
        let outcome = apply(
            &pending(),
            &ReviewAction::Approve { comment: None },
            Some("M. Karim Benaissa"),
            &TransitionPolicy::default(),
        )
        .unwrap();

        assert_eq!(outcome.item.assigned_to.as_deref(), Some("M. Karim Benaissa"));
    }

    #[test]
    fn test_approve_under_review_keeps_assignee() {
        let outcome = apply(
            &under_review(),
            &ReviewAction::Approve { comment: None },
            Some("Someone else"),
            &TransitionPolicy::default(),
        )
        .unwrap();

        assert_eq!(outcome.item.assigned_to.as_deref(), Some("Dr. Amina Khelifi"));
    }

    #[test]
    fn test_assign_sets_reviewer() {
        let outcome = apply(
            &pending(),
            &ReviewAction::AssignForReview {
                reviewer: "Dr. Leila Mansouri".to_string(),
            },
            None,
            &TransitionPolicy::default(),
        )
        .unwrap();

        assert_eq!(outcome.to, ReviewStatus::UnderReview);
        assert_eq!(outcome.item.assigned_to.as_deref(), Some("Dr. Leila Mansouri"));
    }

    #[test]
    fn test_revise_requires_under_review() {
        let err = apply(
            &pending(),
            &ReviewAction::Revise {
                notes: "Articles 3-5 illisibles".to_string(),
            },
            None,
            &TransitionPolicy::default(),
        )
        .unwrap_err();

        match err {
            DocketError::InvalidTransition {
                current,
                action,
                allowed,
                ..
            } => {
                assert_eq!(current, ReviewStatus::Pending);
                assert_eq!(action, ActionKind::Revise);
                assert_eq!(allowed, vec![ReviewStatus::UnderReview]);
            }
            other => panic!("expected InvalidTransition, got {:?}", other),
        }
    }

    #[test]
    fn test_status_is_checked_before_arguments() {
        let approved = pending().with_status(ReviewStatus::Approved, Some("M. Karim Benaissa"));
        let err = apply(
            &approved,
            &ReviewAction::Reject {
                reason: String::new(),
            },
            None,
            &TransitionPolicy::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            DocketError::InvalidTransition {
                current: ReviewStatus::Approved,
                action: ActionKind::Reject,
                ..
            }
        ));

        let err = apply(
            &pending(),
            &ReviewAction::Reject {
                reason: "  ".to_string(),
            },
            None,
            &TransitionPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DocketError::Validation(_)));
    }

    #[test]
    fn test_reject_under_review_follows_policy() {
        let action = ReviewAction::Reject {
            reason: "Document hors périmètre".to_string(),
        };

        assert!(apply(&under_review(), &action, None, &TransitionPolicy::default()).is_err());

        let lenient = TransitionPolicy::new().with_reject_under_review(true);
        let outcome = apply(&under_review(), &action, None, &lenient).unwrap();
        assert_eq!(outcome.to, ReviewStatus::Rejected);
    }

    #[test]
    fn test_resubmit_clears_assignee_and_applies_revision() {
        let item = under_review().with_status(ReviewStatus::NeedsRevision, Some("Dr. Leila Mansouri"));
        let revision = Revision::new()
            .with_title("Arrêté ministériel normes environnementales (v2)")
            .with_confidence(97);

        let outcome = apply(
            &item,
            &ReviewAction::Resubmit {
                revision: Some(revision),
            },
            None,
            &TransitionPolicy::default(),
        )
        .unwrap();

        assert_eq!(outcome.to, ReviewStatus::Pending);
        assert!(outcome.item.assigned_to.is_none());
        assert_eq!(outcome.item.extraction_confidence, 97);
        assert!(outcome.item.title.ends_with("(v2)"));
    }

    #[test]
    fn test_invalid_revision_is_rejected() {
        let item = pending().with_status(ReviewStatus::NeedsRevision, Some("Reviewer"));
        let result = apply(
            &item,
            &ReviewAction::Resubmit {
                revision: Some(Revision::new().with_confidence(120)),
            },
            None,
            &TransitionPolicy::default(),
        );

        assert!(matches!(result, Err(DocketError::Validation(_))));
    }

    #[test]
    fn test_terminal_items_accept_nothing() {
        let approved = pending().with_status(ReviewStatus::Approved, Some("Reviewer"));
        let policy = TransitionPolicy::new().with_reject_under_review(true);

        for action in [
            ReviewAction::Approve { comment: None },
            ReviewAction::Reject {
                reason: "late".to_string(),
            },
            ReviewAction::AssignForReview {
                reviewer: "Reviewer".to_string(),
            },
            ReviewAction::Revise {
                notes: "notes".to_string(),
            },
            ReviewAction::Resubmit { revision: None },
        ] {
            assert!(apply(&approved, &action, None, &policy).is_err());
        }
    }
}
