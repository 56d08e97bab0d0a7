//! Filter criteria and their parsing from UI values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::error::DocketError;
use crate::item::{DocumentType, Priority, ReviewStatus};
use crate::vocabulary::Vocabulary;

/// Sentinel used by UI selects for "no filter".
pub const ALL_SENTINEL: &str = "all";

/// One facet of the filter: either everything, or exactly one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet<T> {
    /// Facet disabled.
    All,
    /// Only items whose field equals this value.
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T> Facet<T> {
    /// Whether this facet filters anything.
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// The selected value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Facet::All => None,
            Facet::Only(v) => Some(v),
        }
    }

    /// Whether a field value passes this facet.
    pub fn admits<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Facet::Only(v),
            None => Facet::All,
        }
    }
}

impl<T: Serialize> Serialize for Facet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Facet::All => serializer.serialize_none(),
            Facet::Only(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Facet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

/// Typed filter criteria. Every facet defaults to "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive text matched against title, submitter and assignee.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search_text: String,

    #[serde(default)]
    pub category: Facet<String>,

    #[serde(default)]
    pub priority: Facet<Priority>,

    #[serde(default)]
    pub document_type: Facet<DocumentType>,

    #[serde(default)]
    pub status: Facet<ReviewStatus>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Only the given category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Facet::Only(category.into());
        self
    }

    /// Only the given priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Facet::Only(priority);
        self
    }

    /// Only the given document type.
    pub fn with_document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = Facet::Only(document_type);
        self
    }

    /// Only the given status.
    pub fn with_status(mut self, status: ReviewStatus) -> Self {
        self.status = Facet::Only(status);
        self
    }

    /// Whether no criterion is active.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && self.category.is_all()
            && self.priority.is_all()
            && self.document_type.is_all()
            && self.status.is_all()
    }

    /// Parse raw UI values.
    ///
    /// A value that cannot be understood is reported as an issue and that
    /// single criterion falls back to "all"; the remaining criteria still apply.
    pub fn parse(raw: &RawCriteria, vocabulary: &Vocabulary) -> ParsedCriteria {
        let mut issues = Vec::new();

        let category = match selected(raw.category.as_deref()) {
            None => Facet::All,
            Some(c) if vocabulary.accepts_category(c) => Facet::Only(c.to_string()),
            Some(c) => {
                issues.push(reject("category", format!("Unknown category: {}", c)));
                Facet::All
            }
        };

        let criteria = FilterCriteria {
            search_text: raw.search.clone().unwrap_or_default(),
            category,
            priority: parse_facet("priority", raw.priority.as_deref(), &mut issues),
            document_type: parse_facet("document_type", raw.document_type.as_deref(), &mut issues),
            status: parse_facet("status", raw.status.as_deref(), &mut issues),
        };

        ParsedCriteria { criteria, issues }
    }
}

/// Untyped criteria as received from selects and text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Result of parsing raw criteria: usable criteria plus any rejected values.
#[derive(Debug)]
pub struct ParsedCriteria {
    pub criteria: FilterCriteria,
    /// One [`DocketError::Validation`] per criterion that fell back to "all".
    pub issues: Vec<DocketError>,
}

impl ParsedCriteria {
    /// Whether every raw value was understood.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

fn selected(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL_SENTINEL))
}

fn parse_facet<T>(name: &str, value: Option<&str>, issues: &mut Vec<DocketError>) -> Facet<T>
where
    T: std::str::FromStr<Err = String>,
{
    match selected(value).map(str::parse::<T>) {
        None => Facet::All,
        Some(Ok(v)) => Facet::Only(v),
        Some(Err(message)) => {
            issues.push(reject(name, message));
            Facet::All
        }
    }
}

fn reject(criterion: &str, message: String) -> DocketError {
    warn!(criterion, %message, "ignoring invalid filter criterion");
    DocketError::Validation(message)
}
