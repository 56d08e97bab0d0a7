//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use docket::RawCriteria;

/// Docket: review queue for machine-extracted documents
#[derive(Parser)]
#[command(name = "docket")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Queue configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Filter options shared by `list` and `batch`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive search in title, submitter and reviewer
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category (or "all")
    #[arg(short, long)]
    pub category: Option<String>,

    /// Priority: high, medium, low (or "all")
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Document type: legal-text, procedure (or "all")
    #[arg(short = 't', long = "type")]
    pub document_type: Option<String>,

    /// Status: pending, under_review, approved, needs_revision, rejected (or "all")
    #[arg(long)]
    pub status: Option<String>,
}

impl FilterArgs {
    pub fn to_raw(&self) -> RawCriteria {
        RawCriteria {
            search: self.search.clone(),
            category: self.category.clone(),
            priority: self.priority.clone(),
            document_type: self.document_type.clone(),
            status: self.status.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show queue statistics and facet counts
    Status {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List items matching filters, one page at a time
    List {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Page number (1-based, clamped to the last page)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Items per page (default from config)
        #[arg(long)]
        page_size: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one item in detail
    Show {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        /// Item id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Approve a pending or under-review item
    Approve {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        /// Item id
        id: String,

        /// Optional approval comment
        #[arg(long)]
        comment: Option<String>,

        /// Reviewer name
        #[arg(long)]
        user: Option<String>,
    },

    /// Reject a pending item
    Reject {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        /// Item id
        id: String,

        /// Rejection reason (required)
        #[arg(long)]
        reason: String,

        /// Reviewer name
        #[arg(long)]
        user: Option<String>,
    },

    /// Put a pending item under review
    Assign {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        /// Item id
        id: String,

        /// Reviewer in charge
        #[arg(long)]
        reviewer: String,
    },

    /// Send an item under review back for corrections
    Revise {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        /// Item id
        id: String,

        /// What needs correcting
        #[arg(long)]
        notes: String,
    },

    /// Return a revised item to pending
    Resubmit {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        /// Item id
        id: String,
    },

    /// Batch approve or reject pending items
    Batch {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        /// Approve items (cannot use with --reject)
        #[arg(long, conflicts_with = "reject")]
        approve: bool,

        /// Reject items (cannot use with --approve)
        #[arg(long, conflicts_with = "approve")]
        reject: bool,

        #[command(flatten)]
        filters: FilterArgs,

        /// Act on every pending item
        #[arg(long)]
        all: bool,

        /// Rejection reason
        #[arg(long, default_value = "Batch rejected")]
        reason: String,

        /// Reviewer name for the decisions
        #[arg(long, default_value = "batch")]
        user: String,
    },

    /// Show the transition audit trail
    History {
        /// Path to queue file
        #[arg(value_name = "QUEUE")]
        file: PathBuf,

        /// Only this item
        id: Option<String>,

        /// Read a backup instead of the current file (0 = newest)
        #[arg(long, value_name = "N")]
        backup: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
