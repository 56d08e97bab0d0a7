//! Aggregate counts over the full item set.
//!
//! Statistics are always computed from every item in the queue, never from a
//! filtered subset, so dashboard counters stay put while a reviewer narrows
//! the list.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::item::{DocumentType, Priority, ReviewItem, ReviewStatus};

/// Counts of items by review status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub pending: usize,
    pub under_review: usize,
    pub approved: usize,
    pub needs_revision: usize,
    pub rejected: usize,
}

impl Statistics {
    /// Count items per status in a single pass.
    pub fn aggregate<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ReviewItem>,
    {
        let mut stats = Statistics::default();
        for item in items {
            stats.record(item.status);
        }
        stats
    }

    fn record(&mut self, status: ReviewStatus) {
        self.total += 1;
        match status {
            ReviewStatus::Pending => self.pending += 1,
            ReviewStatus::UnderReview => self.under_review += 1,
            ReviewStatus::Approved => self.approved += 1,
            ReviewStatus::NeedsRevision => self.needs_revision += 1,
            ReviewStatus::Rejected => self.rejected += 1,
        }
    }

    /// Count for one status.
    pub fn count(&self, status: ReviewStatus) -> usize {
        match status {
            ReviewStatus::Pending => self.pending,
            ReviewStatus::UnderReview => self.under_review,
            ReviewStatus::Approved => self.approved,
            ReviewStatus::NeedsRevision => self.needs_revision,
            ReviewStatus::Rejected => self.rejected,
        }
    }

    /// Items in a terminal status.
    pub fn decided(&self) -> usize {
        self.approved + self.rejected
    }

    /// Items still moving through review.
    pub fn open(&self) -> usize {
        self.pending + self.under_review + self.needs_revision
    }

    /// Fraction of items decided (0.0 to 1.0). An empty queue counts as done.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.decided() as f64 / self.total as f64
    }
}

/// Free function form of [`Statistics::aggregate`].
pub fn aggregate<'a, I>(items: I) -> Statistics
where
    I: IntoIterator<Item = &'a ReviewItem>,
{
    Statistics::aggregate(items)
}

/// Per-facet item counts, used to annotate filter options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    /// Items per category, in first-seen order.
    pub by_category: IndexMap<String, usize>,
    /// Items per priority, highest first.
    pub by_priority: IndexMap<Priority, usize>,
    /// Items per document type.
    pub by_document_type: IndexMap<DocumentType, usize>,
}

impl FacetCounts {
    /// Collect facet counts over a set of items.
    pub fn collect<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ReviewItem>,
    {
        let mut counts = FacetCounts {
            by_category: IndexMap::new(),
            by_priority: Priority::ALL.iter().map(|p| (*p, 0)).collect(),
            by_document_type: DocumentType::ALL.iter().map(|t| (*t, 0)).collect(),
        };

        for item in items {
            *counts.by_category.entry(item.category.clone()).or_insert(0) += 1;
            *counts.by_priority.entry(item.priority).or_insert(0) += 1;
            *counts.by_document_type.entry(item.document_type()).or_insert(0) += 1;
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ExtractedData;

    fn item(id: &str, status: ReviewStatus, category: &str) -> ReviewItem {
        let assignee = status.allows_assignee().then_some("Reviewer");
        ReviewItem::new(id, format!("Document {}", id), ExtractedData::legal_text("Loi", category))
            .with_category(category)
            .with_status(status, assignee)
    }

    #[test]
    fn test_aggregate_counts_every_status() {
        let items = vec![
            item("1", ReviewStatus::Pending, "Finance"),
            item("2", ReviewStatus::UnderReview, "Justice"),
            item("3", ReviewStatus::Approved, "Commerce"),
            item("4", ReviewStatus::NeedsRevision, "Environnement"),
            item("5", ReviewStatus::Approved, "Administration"),
        ];

        let stats = aggregate(&items);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.under_review, 1);
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.needs_revision, 1);
        assert_eq!(stats.rejected, 0);
        assert_eq!(stats.decided(), 2);
        assert_eq!(stats.open(), 3);
        assert_eq!(stats.count(ReviewStatus::Approved), 2);
    }

    #[test]
    fn test_empty_queue_progress() {
        let stats = Statistics::default();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.progress(), 1.0);
    }

    #[test]
    fn test_progress_fraction() {
        let items = vec![
            item("1", ReviewStatus::Approved, "Finance"),
            item("2", ReviewStatus::Rejected, "Finance"),
            item("3", ReviewStatus::Pending, "Finance"),
            item("4", ReviewStatus::Pending, "Finance"),
        ];

        assert_eq!(aggregate(&items).progress(), 0.5);
    }

    #[test]
    fn test_facet_counts_preserve_first_seen_category_order() {
        let items = vec![
            item("1", ReviewStatus::Pending, "Justice"),
            item("2", ReviewStatus::Pending, "Finance"),
            item("3", ReviewStatus::Pending, "Justice"),
        ];

        let counts = FacetCounts::collect(&items);
        let categories: Vec<_> = counts.by_category.iter().collect();

        assert_eq!(categories[0], (&"Justice".to_string(), &2));
        assert_eq!(categories[1], (&"Finance".to_string(), &1));
        assert_eq!(counts.by_priority[&Priority::Medium], 3);
        assert_eq!(counts.by_priority[&Priority::High], 0);
        assert_eq!(counts.by_document_type[&DocumentType::LegalText], 3);
    }
}
