//! Stable, order-preserving filtering of review items.

use indexmap::IndexMap;
use tracing::debug;

use crate::item::{DocumentType, ReviewItem};

use super::criteria::FilterCriteria;

/// Compiled form of [`FilterCriteria`].
///
/// The search needle is lowercased once so matching a large queue does not
/// re-allocate per item.
#[derive(Debug, Clone)]
pub struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    needle: Option<String>,
}

impl<'c> Matcher<'c> {
    /// Compile criteria into a matcher.
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        let text = criteria.search_text.as_str();
        let needle = (!text.is_empty()).then(|| text.to_lowercase());
        Self { criteria, needle }
    }

    /// Whether an item satisfies every active criterion.
    pub fn matches(&self, item: &ReviewItem) -> bool {
        self.matches_search(item)
            && self.criteria.category.admits(item.category.as_str())
            && self.criteria.priority.admits(&item.priority)
            && self.criteria.document_type.admits(&item.document_type())
            && self.criteria.status.admits(&item.status)
    }

    fn matches_search(&self, item: &ReviewItem) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };

        let contains = |field: &str| field.to_lowercase().contains(needle.as_str());

        contains(item.title.as_str())
            || contains(item.submitted_by.as_str())
            || item.assigned_to.as_deref().is_some_and(contains)
    }
}

/// Filter items, keeping input order.
pub fn filter<'a, I>(items: I, criteria: &FilterCriteria) -> Vec<&'a ReviewItem>
where
    I: IntoIterator<Item = &'a ReviewItem>,
{
    let matcher = Matcher::new(criteria);
    let mut seen = 0usize;
    let matched: Vec<&ReviewItem> = items
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|item| matcher.matches(item))
        .collect();

    debug!(matched = matched.len(), total = seen, "filtered review items");
    matched
}

/// Filtered items grouped the way the dashboard tabs show them.
#[derive(Debug, Clone)]
pub struct TypeGroups<'a> {
    /// Every item, in input order.
    pub all: Vec<&'a ReviewItem>,
    /// Items per document type; every type is present, possibly empty.
    pub by_type: IndexMap<DocumentType, Vec<&'a ReviewItem>>,
}

impl<'a> TypeGroups<'a> {
    /// Items of one document type.
    pub fn of(&self, document_type: DocumentType) -> &[&'a ReviewItem] {
        self.by_type
            .get(&document_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Split a (usually filtered) set into per-document-type groups.
pub fn partition_by_type<'a>(items: &[&'a ReviewItem]) -> TypeGroups<'a> {
    let mut by_type: IndexMap<DocumentType, Vec<&'a ReviewItem>> = DocumentType::ALL
        .iter()
        .map(|t| (*t, Vec::new()))
        .collect();

    for item in items {
        by_type.entry(item.document_type()).or_default().push(*item);
    }

    TypeGroups {
        all: items.to_vec(),
        by_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ExtractedData, Priority, ReviewStatus};

    fn item(id: &str, title: &str, category: &str, payload: ExtractedData) -> ReviewItem {
        ReviewItem::new(id, title, payload)
            .with_submitted_by("Système OCR-IA")
            .with_category(category)
    }

    fn items() -> Vec<ReviewItem> {
        vec![
            item("1", "Loi relative aux investissements", "Finance", ExtractedData::legal_text("Loi", "Finance"))
                .with_priority(Priority::High),
            item("2", "Décret exécutif modalités application", "Justice", ExtractedData::legal_text("Décret exécutif", "Justice"))
                .with_status(ReviewStatus::UnderReview, Some("Dr. Amina Khelifi")),
            item("3", "Procédure création entreprise SARL", "Commerce", ExtractedData::procedure("Commerce", "Ministère du Commerce"))
                .with_status(ReviewStatus::Approved, Some("M. Karim Benaissa")),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = items();
        let result = filter(&items, &FilterCriteria::new().with_search("LOI"));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "1");
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let items = items();

        assert!(filter(&items, &FilterCriteria::new().with_search(" loi")).is_empty());

        let result = filter(&items, &FilterCriteria::new().with_search("relative "));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "1");

        let blank = filter(&items, &FilterCriteria::new().with_search(" "));
        assert_eq!(blank.len(), 3);
    }

    #[test]
    fn test_search_matches_assignee() {
        let items = items();
        let result = filter(&items, &FilterCriteria::new().with_search("khelifi"));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "2");
    }

    #[test]
    fn test_search_matches_submitter() {
        let items = items();
        let result = filter(&items, &FilterCriteria::new().with_search("ocr-ia"));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_facets_combine_with_and() {
        let items = items();
        let criteria = FilterCriteria::new()
            .with_document_type(DocumentType::LegalText)
            .with_priority(Priority::Medium);

        let result = filter(&items, &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "2");
    }

    #[test]
    fn test_status_facet() {
        let items = items();
        let result = filter(&items, &FilterCriteria::new().with_status(ReviewStatus::Approved));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "3");
    }

    #[test]
    fn test_partition_by_type() {
        let items = items();
        let all = filter(&items, &FilterCriteria::new());
        let groups = partition_by_type(&all);

        assert_eq!(groups.all.len(), 3);
        assert_eq!(groups.of(DocumentType::LegalText).len(), 2);
        assert_eq!(groups.of(DocumentType::Procedure).len(), 1);
    }

    #[test]
    fn test_partition_keeps_empty_groups() {
        let groups = partition_by_type(&[]);

        assert!(groups.all.is_empty());
        assert_eq!(groups.by_type.len(), 2);
        assert!(groups.of(DocumentType::Procedure).is_empty());
    }
}
