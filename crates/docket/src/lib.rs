//! Docket: review queue engine for machine-extracted documents.
//!
//! Documents produced by an OCR/extraction pipeline enter a queue as pending
//! items and move through a review lifecycle until a reviewer approves or
//! rejects them. Docket provides the pieces a review dashboard is built from:
//!
//! - **Filtering**: free-text search plus category, priority, document-type
//!   and status facets, order-preserving
//! - **Statistics**: per-status counts over the whole queue
//! - **Pagination**: 1-based pages with clamping
//! - **Review queue**: the status state machine, history and observer callbacks
//! - **Presentation**: badges, cards and tabs ready to render
//!
//! The library performs no I/O. Persistence and notifications are left to
//! [`ReviewObserver`] implementations and to callers of
//! [`ReviewQueue::snapshot`].
//!
//! # Example
//!
//! ```
//! use docket::{ExtractedData, QueueConfig, ReviewItem, ReviewSession, ReviewStatus};
//!
//! let items = vec![
//!     ReviewItem::new("1", "Loi relative aux investissements", ExtractedData::legal_text("Loi", "Finance"))
//!         .with_confidence(94)
//!         .with_category("Finance"),
//! ];
//!
//! let mut session = ReviewSession::from_items(items, QueueConfig::default()).unwrap();
//! session.approve("1", Some("Conforme")).unwrap();
//!
//! let view = session.view();
//! assert_eq!(view.cards[0].status.label, "Approved");
//! assert_eq!(session.statistics().count(ReviewStatus::Approved), 1);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod item;
pub mod pagination;
pub mod presentation;
pub mod queue;
pub mod session;
pub mod stats;
pub mod vocabulary;

pub use config::QueueConfig;
pub use error::{DocketError, Result};
pub use filter::{Facet, FilterCriteria, RawCriteria, filter};
pub use item::{DocumentType, ExtractedData, ItemId, Priority, ReviewItem, ReviewStatus};
pub use pagination::{Page, Paginator};
pub use presentation::{DashboardView, ItemCard, Presenter};
pub use queue::{
    ActionKind, QueueSnapshot, ReviewAction, ReviewObserver, ReviewQueue, Revision,
    TransitionPolicy, TransitionRecord,
};
pub use session::ReviewSession;
pub use stats::{FacetCounts, Statistics, aggregate};
pub use vocabulary::Vocabulary;
