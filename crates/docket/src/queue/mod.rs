//! Review queue state machine.
//!
//! Items move through a fixed lifecycle:
//!
//! ```text
//! pending ──assign──▶ under review ──revise──▶ needs revision
//!    │                    │                        │
//!    │ approve/reject     │ approve                │ resubmit
//!    ▼                    ▼                        ▼
//! approved / rejected   approved                 pending
//! ```
//!
//! Approved and rejected items are terminal.

mod action;
mod engine;
mod history;
mod observer;
mod policy;
pub mod transition;

pub use action::{ActionKind, ReviewAction, Revision};
pub use engine::{QueueSnapshot, ReviewQueue};
pub use history::TransitionRecord;
pub use observer::{Notification, RecordingObserver, ReviewObserver};
pub use policy::TransitionPolicy;
pub use transition::{TransitionOutcome, apply};
