//! Queue view configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DocketError, Result};
use crate::filter::{Facet, FilterCriteria};
use crate::item::DocumentType;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::queue::TransitionPolicy;
use crate::vocabulary::Vocabulary;

/// Page size of the low-density template category view.
pub const TEMPLATE_PAGE_SIZE: usize = 4;

/// Configuration for one review dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Items per page.
    pub page_size: usize,

    /// Criteria applied when a session starts.
    pub initial_criteria: FilterCriteria,

    /// Document types shown by this view. `All` enables the type tabs.
    pub scope: Facet<DocumentType>,

    /// Optional transitions.
    pub policy: TransitionPolicy,

    /// Categories and display labels.
    pub vocabulary: Vocabulary,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_criteria: FilterCriteria::default(),
            scope: Facet::All,
            policy: TransitionPolicy::default(),
            vocabulary: Vocabulary::default(),
        }
    }
}

impl QueueConfig {
    /// Low-density preset for template category listings.
    pub fn template_categories() -> Self {
        Self {
            page_size: TEMPLATE_PAGE_SIZE,
            ..Self::default()
        }
    }

    /// A view restricted to one document type.
    pub fn scoped(document_type: DocumentType) -> Self {
        Self {
            scope: Facet::Only(document_type),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.initial_criteria = criteria;
        self
    }

    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DocketError::Config("page_size must be at least 1".to_string()));
        }
        if let Some(category) = self.initial_criteria.category.value() {
            if !self.vocabulary.accepts_category(category) {
                return Err(DocketError::Config(format!(
                    "Initial category '{}' is not in the vocabulary",
                    category
                )));
            }
        }
        Ok(())
    }
}
