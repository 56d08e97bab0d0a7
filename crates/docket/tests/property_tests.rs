//! Property-based tests for filtering, statistics, pagination and the queue.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p docket --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p docket --test property_tests
//! ```

use proptest::prelude::*;

use docket::pagination::{page_range, total_pages};
use docket::{
    ExtractedData, Facet, FilterCriteria, Paginator, Priority, ReviewItem, ReviewQueue,
    ReviewStatus, Statistics, filter,
};

// =============================================================================
// Test Strategies
// =============================================================================

fn status() -> impl Strategy<Value = ReviewStatus> {
    prop::sample::select(ReviewStatus::ALL.to_vec())
}

fn priority() -> impl Strategy<Value = Priority> {
    prop::sample::select(Priority::ALL.to_vec())
}

fn category() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Finance", "Justice", "Commerce", "Environnement"])
        .prop_map(str::to_string)
}

fn payload() -> impl Strategy<Value = ExtractedData> {
    prop_oneof![
        Just(ExtractedData::legal_text("Loi", "Finance")),
        Just(ExtractedData::procedure("Commerce", "Ministère du Commerce")),
    ]
}

/// A valid queue: unique ids, assignee only when the status allows one.
fn items() -> impl Strategy<Value = Vec<ReviewItem>> {
    prop::collection::vec(
        (
            "[A-Za-zéè ]{1,24}",
            status(),
            priority(),
            category(),
            payload(),
            0u8..=100,
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, status, priority, category, payload, confidence))| {
                let assignee = status.allows_assignee().then_some("Reviewer");
                ReviewItem::new(format!("item-{}", i), format!("T {}", title), payload)
                    .with_priority(priority)
                    .with_category(category)
                    .with_confidence(confidence)
                    .with_submitted_by("Système OCR-IA")
                    .with_status(status, assignee)
            })
            .collect()
    })
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop_oneof![Just(String::new()), "[a-z]{1,3}"],
        prop::option::of(category()),
        prop::option::of(priority()),
        prop::option::of(status()),
    )
        .prop_map(|(search, category, priority, status)| FilterCriteria {
            search_text: search,
            category: Facet::from(category),
            priority: Facet::from(priority),
            status: Facet::from(status),
            ..FilterCriteria::default()
        })
}

// =============================================================================
// Statistics
// =============================================================================

proptest! {
    /// Buckets always sum to the total, which equals the input length.
    #[test]
    fn statistics_buckets_sum_to_total(items in items()) {
        let stats = Statistics::aggregate(&items);

        prop_assert_eq!(stats.total, items.len());
        let sum: usize = ReviewStatus::ALL.iter().map(|s| stats.count(*s)).sum();
        prop_assert_eq!(sum, stats.total);
        prop_assert_eq!(stats.decided() + stats.open(), stats.total);
    }
}

// =============================================================================
// Filtering
// =============================================================================

proptest! {
    /// Filtering twice with the same criteria changes nothing.
    #[test]
    fn filter_is_idempotent(items in items(), criteria in criteria()) {
        let once = filter(&items, &criteria);
        let twice = filter(once.iter().copied(), &criteria);

        prop_assert_eq!(once, twice);
    }

    /// Unfiltered criteria return the input unchanged.
    #[test]
    fn empty_criteria_is_identity(items in items()) {
        let matched = filter(&items, &FilterCriteria::default());
        let expected: Vec<&ReviewItem> = items.iter().collect();

        prop_assert_eq!(matched, expected);
    }

    /// Output is an order-preserving subsequence of the input.
    #[test]
    fn filter_preserves_order(items in items(), criteria in criteria()) {
        let matched = filter(&items, &criteria);
        let positions: Vec<usize> = matched
            .iter()
            .map(|m| items.iter().position(|i| i.id == m.id).unwrap())
            .collect();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

// =============================================================================
// Pagination
// =============================================================================

proptest! {
    /// Concatenating every page reconstructs the sequence.
    #[test]
    fn pages_reconstruct_sequence(len in 0usize..200, size in 1usize..25) {
        let data: Vec<usize> = (0..len).collect();
        let mut paginator = Paginator::new(size).unwrap();
        paginator.set_total_items(data.len());

        let mut rebuilt = Vec::new();
        for page in 1..=paginator.total_pages() {
            paginator.set_page(page);
            rebuilt.extend_from_slice(paginator.slice(&data));
        }

        prop_assert_eq!(rebuilt, data);
    }

    /// A non-empty sequence never yields an empty page, whatever is requested.
    #[test]
    fn clamped_page_is_never_empty(len in 1usize..200, size in 1usize..25, page in 0usize..100) {
        let range = page_range(len, page, size);

        prop_assert!(!range.is_empty());
        prop_assert!(range.end <= len);
        prop_assert!(total_pages(len, size) >= 1);
    }
}

// =============================================================================
// Queue
// =============================================================================

proptest! {
    /// Approving from a status outside pending/under review never changes the queue.
    #[test]
    fn invalid_approve_leaves_queue_unchanged(items in items()) {
        let mut queue = ReviewQueue::new(items.clone()).unwrap();
        let mut approved = 0;

        for item in &items {
            let result = queue.approve(item.id.as_str(), None);
            let allowed = matches!(item.status, ReviewStatus::Pending | ReviewStatus::UnderReview);
            prop_assert_eq!(result.is_ok(), allowed);
            if allowed {
                approved += 1;
            }
        }

        prop_assert_eq!(queue.history().len(), approved);
        for (old, new) in items.iter().zip(queue.items().iter()) {
            if old.status.is_terminal() || old.status == ReviewStatus::NeedsRevision {
                prop_assert_eq!(old, new);
            } else {
                prop_assert_eq!(new.status, ReviewStatus::Approved);
            }
        }
    }
}
