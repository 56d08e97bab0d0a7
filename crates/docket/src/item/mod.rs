//! Review item data model.
//!
//! A [`ReviewItem`] is a machine-extracted document handed to the queue by an
//! external extraction process. Its [`ExtractedData`] payload is a tagged
//! union keyed by [`DocumentType`].

mod payload;
mod review_item;
mod types;

pub use payload::ExtractedData;
pub use review_item::{ItemId, ReviewItem, MAX_CONFIDENCE};
pub use types::{DocumentType, Priority, ReviewStatus};
