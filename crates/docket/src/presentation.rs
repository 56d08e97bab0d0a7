//! Renderable view-models for review dashboards.
//!
//! This layer only maps engine output to labels, tones and formatted values.
//! It holds no state and makes no decisions beyond asking the transition
//! policy which actions an item offers.

use serde::Serialize;

use crate::filter::{Facet, TypeGroups};
use crate::item::{DocumentType, Priority, ReviewItem, ReviewStatus};
use crate::pagination::Page;
use crate::queue::{ActionKind, TransitionPolicy};
use crate::stats::Statistics;
use crate::vocabulary::Vocabulary;

/// Display format for calendar dates (day/month/year).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Colour family of a badge or card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Caution,
    Danger,
}

impl Tone {
    pub fn for_status(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Pending => Tone::Warning,
            ReviewStatus::UnderReview => Tone::Info,
            ReviewStatus::Approved => Tone::Success,
            ReviewStatus::NeedsRevision => Tone::Caution,
            ReviewStatus::Rejected => Tone::Danger,
        }
    }

    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::High => Tone::Danger,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Success,
        }
    }
}

/// A short label with a tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

/// Everything needed to render one item in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCard {
    pub id: String,
    pub title: String,
    pub document_type: String,
    pub status: Badge,
    pub priority: Badge,
    pub category: String,
    pub submitted_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Submission date, formatted with [`DATE_FORMAT`].
    pub submitted_date: String,
    /// Confidence with a percent sign, e.g. `"94%"`.
    pub confidence: String,
    /// One-line payload summary.
    pub summary: String,
    /// State-changing actions offered, in button order.
    pub actions: Vec<ActionKind>,
}

impl ItemCard {
    /// Whether the card offers an action.
    pub fn offers(&self, action: ActionKind) -> bool {
        self.actions.contains(&action)
    }
}

/// One counter in the statistics strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// `None` for the total counter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    pub label: String,
    pub value: usize,
    pub tone: Tone,
}

/// One document-type tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    /// `None` for the unfiltered tab.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// The complete dashboard for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Counters over the whole queue.
    pub stats: Vec<StatCard>,
    /// Document-type tabs. Empty when the view is scoped to one type.
    pub tabs: Vec<TabView>,
    /// Cards on the current page.
    pub cards: Vec<ItemCard>,
    pub page: usize,
    pub total_pages: usize,
    /// Items matching the active criteria, across all pages.
    pub matching: usize,
    /// 1-based positions of the first and last card shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showing: Option<(usize, usize)>,
    /// Set when there is nothing to show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Maps engine values to view-models using one vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Presenter<'a> {
    vocabulary: &'a Vocabulary,
    policy: &'a TransitionPolicy,
}

impl<'a> Presenter<'a> {
    pub fn new(vocabulary: &'a Vocabulary, policy: &'a TransitionPolicy) -> Self {
        Self { vocabulary, policy }
    }

    pub fn status_badge(&self, status: ReviewStatus) -> Badge {
        Badge {
            label: self.vocabulary.status_label(status).to_string(),
            tone: Tone::for_status(status),
        }
    }

    pub fn priority_badge(&self, priority: Priority) -> Badge {
        Badge {
            label: self.vocabulary.priority_label(priority).to_string(),
            tone: Tone::for_priority(priority),
        }
    }

    pub fn card(&self, item: &ReviewItem) -> ItemCard {
        ItemCard {
            id: item.id.to_string(),
            title: item.title.clone(),
            document_type: self
                .vocabulary
                .document_type_label(item.document_type())
                .to_string(),
            status: self.status_badge(item.status),
            priority: self.priority_badge(item.priority),
            category: item.category.clone(),
            submitted_by: item.submitted_by.clone(),
            assigned_to: item.assigned_to.clone(),
            submitted_date: item.submitted_date.format(DATE_FORMAT).to_string(),
            confidence: format!("{}%", item.extraction_confidence),
            summary: item.payload.summary(),
            actions: self.policy.available_actions(item.status),
        }
    }

    /// Total counter followed by one counter per status.
    pub fn stat_cards(&self, stats: &Statistics) -> Vec<StatCard> {
        let mut cards = Vec::with_capacity(ReviewStatus::ALL.len() + 1);
        cards.push(StatCard {
            status: None,
            label: "Total".to_string(),
            value: stats.total,
            tone: Tone::Neutral,
        });
        cards.extend(ReviewStatus::ALL.iter().map(|&status| StatCard {
            status: Some(status),
            label: self.vocabulary.status_label(status).to_string(),
            value: stats.count(status),
            tone: Tone::for_status(status),
        }));
        cards
    }

    /// The "all" tab followed by one tab per document type.
    pub fn tabs(&self, groups: &TypeGroups<'_>, active: &Facet<DocumentType>) -> Vec<TabView> {
        let mut tabs = vec![TabView {
            document_type: None,
            label: self.vocabulary.all_label().to_string(),
            count: groups.all.len(),
            active: active.is_all(),
        }];
        tabs.extend(DocumentType::ALL.iter().map(|&document_type| TabView {
            document_type: Some(document_type),
            label: self
                .vocabulary
                .document_type_label(document_type)
                .to_string(),
            count: groups.of(document_type).len(),
            active: active.value() == Some(&document_type),
        }));
        tabs
    }

    /// Assemble a dashboard from one page of filtered items.
    pub fn dashboard(
        &self,
        stats: &Statistics,
        tabs: Vec<TabView>,
        page: &Page<'_, &ReviewItem>,
    ) -> DashboardView {
        let cards: Vec<ItemCard> = page.items.iter().map(|item| self.card(item)).collect();
        let showing = (!cards.is_empty()).then(|| (page.first_item_number(), page.last_item_number()));
        let empty_message = cards
            .is_empty()
            .then(|| self.vocabulary.empty_message().to_string());

        DashboardView {
            stats: self.stat_cards(stats),
            tabs,
            cards,
            page: page.number,
            total_pages: page.total_pages,
            matching: page.total_items,
            showing,
            empty_message,
        }
    }
}
