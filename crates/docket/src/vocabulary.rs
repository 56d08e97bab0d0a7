//! Pluggable category and label vocabularies.
//!
//! One queue engine serves several dashboard views; each view brings its own
//! list of categories and its own display labels instead of hard-coding them
//! in match statements.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::item::{DocumentType, Priority, ReviewStatus};

/// Categories and display labels for one dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Known categories, in display order. Empty means any category is accepted.
    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub categories: IndexSet<String>,

    /// Display labels per priority.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub priority_labels: IndexMap<Priority, String>,

    /// Display labels per status.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub status_labels: IndexMap<ReviewStatus, String>,

    /// Display labels per document type.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub document_type_labels: IndexMap<DocumentType, String>,

    /// Label of the unfiltered tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_label: Option<String>,

    /// Text shown when no item matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl Vocabulary {
    /// Open vocabulary with English labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vocabulary of the French legal-document approval dashboard.
    pub fn french_legal() -> Self {
        Self::new()
            .with_categories([
                "Environnement",
                "Commerce",
                "Finance",
                "Justice",
                "Administration",
            ])
            .with_priority_label(Priority::High, "Urgent")
            .with_priority_label(Priority::Medium, "Normal")
            .with_priority_label(Priority::Low, "Faible")
            .with_status_label(ReviewStatus::Pending, "En attente")
            .with_status_label(ReviewStatus::UnderReview, "En révision")
            .with_status_label(ReviewStatus::Approved, "Approuvé")
            .with_status_label(ReviewStatus::NeedsRevision, "À réviser")
            .with_status_label(ReviewStatus::Rejected, "Rejeté")
            .with_document_type_label(DocumentType::LegalText, "Textes juridiques")
            .with_document_type_label(DocumentType::Procedure, "Procédures")
            .with_all_label("Tout")
            .with_empty_message("Aucun élément en attente")
    }

    /// Restrict categories to a closed list.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set a priority label.
    pub fn with_priority_label(mut self, priority: Priority, label: impl Into<String>) -> Self {
        self.priority_labels.insert(priority, label.into());
        self
    }

    /// Set a status label.
    pub fn with_status_label(mut self, status: ReviewStatus, label: impl Into<String>) -> Self {
        self.status_labels.insert(status, label.into());
        self
    }

    /// Set a document type label.
    pub fn with_document_type_label(
        mut self,
        document_type: DocumentType,
        label: impl Into<String>,
    ) -> Self {
        self.document_type_labels.insert(document_type, label.into());
        self
    }

    /// Set the label of the unfiltered tab.
    pub fn with_all_label(mut self, label: impl Into<String>) -> Self {
        self.all_label = Some(label.into());
        self
    }

    /// Set the empty-state text.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Whether categories are restricted to a known list.
    pub fn is_closed(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Whether a category value is acceptable for filtering.
    pub fn accepts_category(&self, category: &str) -> bool {
        !self.is_closed() || self.categories.contains(category)
    }

    /// Display label for a priority.
    pub fn priority_label(&self, priority: Priority) -> &str {
        self.priority_labels
            .get(&priority)
            .map(String::as_str)
            .unwrap_or(match priority {
                Priority::High => "High",
                Priority::Medium => "Medium",
                Priority::Low => "Low",
            })
    }

    /// Display label for a status.
    pub fn status_label(&self, status: ReviewStatus) -> &str {
        self.status_labels
            .get(&status)
            .map(String::as_str)
            .unwrap_or(status.label())
    }

    /// Display label for a document type.
    pub fn document_type_label(&self, document_type: DocumentType) -> &str {
        self.document_type_labels
            .get(&document_type)
            .map(String::as_str)
            .unwrap_or(document_type.label())
    }

    /// Label of the unfiltered tab.
    pub fn all_label(&self) -> &str {
        self.all_label.as_deref().unwrap_or("All")
    }

    /// Text shown when no item matches.
    pub fn empty_message(&self) -> &str {
        self.empty_message
            .as_deref()
            .unwrap_or("No items awaiting review")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_vocabulary_accepts_anything() {
        let vocab = Vocabulary::new();
        assert!(!vocab.is_closed());
        assert!(vocab.accepts_category("Fiscalité"));
        assert_eq!(vocab.priority_label(Priority::High), "High");
        assert_eq!(vocab.status_label(ReviewStatus::NeedsRevision), "Needs revision");
    }

    #[test]
    fn test_french_legal_vocabulary() {
        let vocab = Vocabulary::french_legal();

        assert!(vocab.accepts_category("Commerce"));
        assert!(!vocab.accepts_category("Fiscalité"));
        assert_eq!(vocab.priority_label(Priority::High), "Urgent");
        assert_eq!(vocab.status_label(ReviewStatus::Approved), "Approuvé");
        assert_eq!(vocab.document_type_label(DocumentType::Procedure), "Procédures");
        assert_eq!(vocab.all_label(), "Tout");

        let order: Vec<_> = vocab.categories.iter().map(String::as_str).collect();
        assert_eq!(order[0], "Environnement");
        assert_eq!(order[4], "Administration");
    }

    #[test]
    fn test_vocabulary_from_json() {
        let json = r#"{
            "categories": ["Travail", "Pénal"],
            "priority_labels": { "high": "Critique" }
        }"#;
        let vocab: Vocabulary = serde_json::from_str(json).unwrap();

        assert!(vocab.accepts_category("Pénal"));
        assert_eq!(vocab.priority_label(Priority::High), "Critique");
        assert_eq!(vocab.priority_label(Priority::Low), "Low");
    }
}
