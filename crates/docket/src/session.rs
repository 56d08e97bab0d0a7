//! A reviewer's session over one queue.
//!
//! The session exclusively owns the queue together with the view state that
//! belongs to one dashboard: filter criteria, document-type scope, paginator
//! and vocabulary. [`ReviewSession::view`] recomputes the whole dashboard from
//! that state.

use tracing::debug;

use crate::config::QueueConfig;
use crate::error::{DocketError, Result};
use crate::filter::{Facet, FilterCriteria, RawCriteria, filter, partition_by_type};
use crate::item::{DocumentType, ReviewItem};
use crate::pagination::Paginator;
use crate::presentation::{DashboardView, ItemCard, Presenter};
use crate::queue::{ReviewObserver, ReviewQueue, Revision};
use crate::stats::Statistics;
use crate::vocabulary::Vocabulary;

#[derive(Debug)]
pub struct ReviewSession {
    queue: ReviewQueue,
    criteria: FilterCriteria,
    scope: Facet<DocumentType>,
    paginator: Paginator,
    vocabulary: Vocabulary,
}

impl ReviewSession {
    /// Start a session. The config's policy replaces the queue's.
    pub fn new(queue: ReviewQueue, config: QueueConfig) -> Result<Self> {
        config.validate()?;
        let paginator = Paginator::new(config.page_size)?;

        Ok(Self {
            queue: queue.with_policy(config.policy),
            criteria: config.initial_criteria,
            scope: config.scope,
            paginator,
            vocabulary: config.vocabulary,
        })
    }

    /// Start a session over a loaded set of items.
    pub fn from_items(items: Vec<ReviewItem>, config: QueueConfig) -> Result<Self> {
        Self::new(ReviewQueue::new(items)?, config)
    }

    pub fn queue(&self) -> &ReviewQueue {
        &self.queue
    }

    /// Give the queue back, ending the session.
    pub fn into_queue(self) -> ReviewQueue {
        self.queue
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: ReviewObserver + 'static,
    {
        self.queue.subscribe(observer);
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn scope(&self) -> &Facet<DocumentType> {
        &self.scope
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Replace the criteria and go back to the first page.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.paginator.set_page(1);
    }

    /// Replace the criteria from raw UI values.
    ///
    /// Values that cannot be parsed are dropped and returned; the rest apply.
    pub fn apply_raw_criteria(&mut self, raw: &RawCriteria) -> Vec<DocketError> {
        let parsed = FilterCriteria::parse(raw, &self.vocabulary);
        self.set_criteria(parsed.criteria);
        parsed.issues
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.paginator.set_page(1);
    }

    /// Select a document-type tab. Ignored while the session is scoped.
    pub fn select_tab(&mut self, tab: Facet<DocumentType>) {
        if self.scope.is_all() {
            self.criteria.document_type = tab;
            self.paginator.set_page(1);
        }
    }

    /// Move to a page of the current result. Returns the page selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        let matching = self.visible_items().len();
        self.paginator.set_total_items(matching);
        self.paginator.set_page(page)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        let matching = self.visible_items().len();
        self.paginator.set_total_items(matching);
        self.paginator.set_page_size(page_size)
    }

    /// Criteria actually applied: the scope overrides any selected tab.
    pub fn effective_criteria(&self) -> FilterCriteria {
        let mut criteria = self.criteria.clone();
        if !self.scope.is_all() {
            criteria.document_type = self.scope.clone();
        }
        criteria
    }

    /// Every item matching the effective criteria, in queue order.
    pub fn visible_items(&self) -> Vec<&ReviewItem> {
        filter(self.queue.items(), &self.effective_criteria())
    }

    pub fn statistics(&self) -> Statistics {
        self.queue.statistics()
    }

    /// Recompute the dashboard for the current state.
    pub fn view(&mut self) -> DashboardView {
        let presenter = Presenter::new(&self.vocabulary, self.queue.policy());
        let stats = self.queue.statistics();

        let (matched, tabs) = if self.scope.is_all() {
            let mut untabbed = self.criteria.clone();
            untabbed.document_type = Facet::All;
            let groups = partition_by_type(&filter(self.queue.items(), &untabbed));
            let tabs = presenter.tabs(&groups, &self.criteria.document_type);
            let matched = match self.criteria.document_type.value() {
                Some(document_type) => groups.of(*document_type).to_vec(),
                None => groups.all,
            };
            (matched, tabs)
        } else {
            (filter(self.queue.items(), &self.effective_criteria()), Vec::new())
        };

        let page = self.paginator.paginate(&matched);
        debug!(
            page = page.number,
            total_pages = page.total_pages,
            matching = page.total_items,
            "recomputed dashboard"
        );
        presenter.dashboard(&stats, tabs, &page)
    }

    /// Open one item, notifying observers.
    pub fn view_detail(&self, id: &str) -> Result<ItemCard> {
        let item = self.queue.view(id)?;
        Ok(Presenter::new(&self.vocabulary, self.queue.policy()).card(item))
    }

    pub fn approve(&mut self, id: &str, comment: Option<&str>) -> Result<&ReviewItem> {
        self.queue.approve(id, comment)
    }

    pub fn approve_by(
        &mut self,
        id: &str,
        reviewer: &str,
        comment: Option<&str>,
    ) -> Result<&ReviewItem> {
        self.queue.approve_by(id, reviewer, comment)
    }

    pub fn reject(&mut self, id: &str, reason: &str) -> Result<&ReviewItem> {
        self.queue.reject(id, reason)
    }

    pub fn reject_by(&mut self, id: &str, reviewer: &str, reason: &str) -> Result<&ReviewItem> {
        self.queue.reject_by(id, reviewer, reason)
    }

    pub fn assign_for_review(&mut self, id: &str, reviewer: &str) -> Result<&ReviewItem> {
        self.queue.assign_for_review(id, reviewer)
    }

    pub fn revise(&mut self, id: &str, notes: &str) -> Result<&ReviewItem> {
        self.queue.revise(id, notes)
    }

    pub fn resubmit(&mut self, id: &str) -> Result<&ReviewItem> {
        self.queue.resubmit(id)
    }

    pub fn resubmit_revised(&mut self, id: &str, revision: Revision) -> Result<&ReviewItem> {
        self.queue.resubmit_revised(id, revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ExtractedData, Priority, ReviewStatus};
    use crate::queue::{Notification, RecordingObserver};

    fn items(n: usize) -> Vec<ReviewItem> {
        (1..=n)
            .map(|i| {
                let payload = if i % 3 == 0 {
                    ExtractedData::procedure("Commerce", "Ministère du Commerce")
                } else {
                    ExtractedData::legal_text("Loi", "Finance")
                };
                ReviewItem::new(i.to_string(), format!("Document {}", i), payload)
                    .with_confidence(90)
                    .with_priority(Priority::Medium)
                    .with_category(if i % 3 == 0 { "Commerce" } else { "Finance" })
            })
            .collect()
    }

    #[test]
    fn test_view_paginates_filtered_items() {
        let mut session = ReviewSession::from_items(items(12), QueueConfig::default()).unwrap();

        let first = session.view();
        assert_eq!(first.cards.len(), 10);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.showing, Some((1, 10)));

        assert_eq!(session.set_page(2), 2);
        let second = session.view();
        assert_eq!(second.cards.len(), 2);
        assert_eq!(second.showing, Some((11, 12)));
    }

    #[test]
    fn test_stats_ignore_filters() {
        let mut session = ReviewSession::from_items(items(12), QueueConfig::default()).unwrap();
        session.set_criteria(FilterCriteria::new().with_category("Commerce"));

        let view = session.view();
        assert_eq!(view.matching, 4);
        assert_eq!(view.stats[0].value, 12);
    }

    #[test]
    fn test_tabs_select_document_type() {
        let mut session = ReviewSession::from_items(items(12), QueueConfig::default()).unwrap();
        session.select_tab(Facet::Only(DocumentType::Procedure));

        let view = session.view();
        assert_eq!(view.matching, 4);
        assert_eq!(view.tabs[0].count, 12);
        assert!(view.tabs[2].active);
    }

    #[test]
    fn test_scoped_session_has_no_tabs() {
        let config = QueueConfig::scoped(DocumentType::LegalText);
        let mut session = ReviewSession::from_items(items(12), config).unwrap();
        session.select_tab(Facet::Only(DocumentType::Procedure));

        let view = session.view();
        assert!(view.tabs.is_empty());
        assert_eq!(view.matching, 8);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut session = ReviewSession::from_items(items(12), QueueConfig::default()).unwrap();
        session.set_page(2);
        session.set_search("Document 1");

        assert_eq!(session.paginator().page(), 1);
        let view = session.view();
        // "Document 1", "Document 10", "Document 11", "Document 12"
        assert_eq!(view.matching, 4);
    }

    #[test]
    fn test_raw_criteria_fall_back_per_criterion() {
        let config = QueueConfig::default().with_vocabulary(Vocabulary::french_legal());
        let mut session = ReviewSession::from_items(items(6), config).unwrap();

        let issues = session.apply_raw_criteria(&RawCriteria {
            category: Some("Commerce".to_string()),
            priority: Some("critical".to_string()),
            ..RawCriteria::default()
        });

        assert_eq!(issues.len(), 1);
        assert_eq!(session.view().matching, 2);
    }

    #[test]
    fn test_actions_flow_through_queue() {
        let mut session = ReviewSession::from_items(items(3), QueueConfig::default()).unwrap();
        let observer = RecordingObserver::new();
        session.subscribe(observer.clone());

        session.approve("1", None).unwrap();
        let card = session.view_detail("1").unwrap();

        assert_eq!(session.statistics().approved, 1);
        assert!(card.actions.is_empty());
        assert_eq!(
            observer.callbacks().last(),
            Some(&Notification::Viewed {
                item_id: "1".into()
            })
        );
        assert_eq!(session.queue().get("1").unwrap().status, ReviewStatus::Approved);
    }
}
