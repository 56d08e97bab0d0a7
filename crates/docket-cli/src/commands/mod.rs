//! CLI command implementations.

pub mod act;
pub mod batch;
pub mod history;
pub mod list;
pub mod show;
pub mod status;

use std::path::Path;

use colored::{ColoredString, Colorize};
use docket::presentation::Tone;
use docket::{QueueConfig, ReviewQueue, ReviewSession};

use crate::observer::ConsoleObserver;
use crate::store;

/// Load a queue file into a session configured by `config`.
pub fn open_session(
    file: &Path,
    config: &QueueConfig,
) -> Result<ReviewSession, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Queue file not found: {}", file.display()).into());
    }

    let queue = ReviewQueue::from_snapshot(store::load(file)?)?;
    Ok(ReviewSession::new(queue, config.clone())?)
}

/// Like [`open_session`], with console notifications attached.
pub fn open_for_review(
    file: &Path,
    config: &QueueConfig,
    verbose: bool,
) -> Result<ReviewSession, Box<dyn std::error::Error>> {
    let mut session = open_session(file, config)?;
    session.subscribe(ConsoleObserver::new(verbose));
    Ok(session)
}

/// Persist the session's queue, keeping the previous file as a backup.
pub fn persist(session: &ReviewSession, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    store::save_with_history(&session.queue().snapshot(), file)?;
    Ok(())
}

/// Colour a label by its tone.
pub fn paint(label: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Neutral => label.white(),
        Tone::Info => label.blue(),
        Tone::Success => label.green(),
        Tone::Warning => label.yellow(),
        Tone::Caution => label.truecolor(255, 140, 0),
        Tone::Danger => label.red(),
    }
}
