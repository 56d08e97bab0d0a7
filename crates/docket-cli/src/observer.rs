//! Terminal notifications for committed review actions.

use colored::Colorize;
use docket::queue::ReviewObserver;
use docket::{ReviewItem, TransitionRecord};
use tracing::debug;

/// Prints one line per callback.
pub struct ConsoleObserver {
    /// Print every transition, not only approve/reject/revise.
    pub verbose: bool,
}

impl ConsoleObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ReviewObserver for ConsoleObserver {
    fn on_approve(&self, item: &ReviewItem, comment: Option<&str>) {
        match comment {
            Some(comment) => println!(
                "{} {} {} ({})",
                "✓".green(),
                item.id.as_str().white().bold(),
                item.title,
                comment.dimmed()
            ),
            None => println!("{} {} {}", "✓".green(), item.id.as_str().white().bold(), item.title),
        }
    }

    fn on_reject(&self, item: &ReviewItem, reason: &str) {
        println!(
            "{} {} {}: {}",
            "✗".red(),
            item.id.as_str().white().bold(),
            item.title,
            reason.red()
        );
    }

    fn on_revision(&self, item: &ReviewItem, notes: &str) {
        println!(
            "{} {} {}: {}",
            "↺".yellow(),
            item.id.as_str().white().bold(),
            item.title,
            notes.yellow()
        );
    }

    fn on_view_detail(&self, item: &ReviewItem) {
        debug!(item = %item.id, "viewed item detail");
    }

    fn on_transition(&self, record: &TransitionRecord, item: &ReviewItem) {
        if self.verbose {
            println!(
                "  {} {} {}: {} → {}",
                "•".dimmed(),
                record.id.dimmed(),
                item.id,
                record.from,
                record.to
            );
        }
    }
}
