//! Faceted search over review items.
//!
//! [`FilterCriteria`] combines free-text search with category, priority,
//! document-type and status facets. All active facets are ANDed together and
//! [`filter`] never reorders its input.

mod criteria;
mod engine;

pub use criteria::{ALL_SENTINEL, Facet, FilterCriteria, ParsedCriteria, RawCriteria};
pub use engine::{Matcher, TypeGroups, filter, partition_by_type};
