//! Single-item review actions: approve, reject, assign, revise, resubmit.

use std::path::{Path, PathBuf};

use colored::Colorize;
use docket::presentation::Tone;
use docket::{QueueConfig, ReviewItem, ReviewSession};

use super::{open_for_review, paint, persist};

/// Open the queue, run one action, save on success.
fn commit<F>(
    file: &Path,
    config: &QueueConfig,
    action: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut ReviewSession) -> docket::Result<&ReviewItem>,
{
    let mut session = open_for_review(file, config, false)?;

    let item = action(&mut session)?;
    let line = format!("{} is now {}", item.id, item.status);
    let tone = Tone::for_status(item.status);

    persist(&session, file)?;
    println!("{} {}", "Saved:".green().bold(), paint(&line, tone));
    Ok(())
}

pub fn approve(
    file: PathBuf,
    config: &QueueConfig,
    id: String,
    comment: Option<String>,
    user: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    commit(&file, config, |session| match &user {
        Some(user) => session.approve_by(&id, user, comment.as_deref()),
        None => session.approve(&id, comment.as_deref()),
    })
}

pub fn reject(
    file: PathBuf,
    config: &QueueConfig,
    id: String,
    reason: String,
    user: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    commit(&file, config, |session| match &user {
        Some(user) => session.reject_by(&id, user, &reason),
        None => session.reject(&id, &reason),
    })
}

pub fn assign(
    file: PathBuf,
    config: &QueueConfig,
    id: String,
    reviewer: String,
) -> Result<(), Box<dyn std::error::Error>> {
    commit(&file, config, |session| session.assign_for_review(&id, &reviewer))
}

pub fn revise(
    file: PathBuf,
    config: &QueueConfig,
    id: String,
    notes: String,
) -> Result<(), Box<dyn std::error::Error>> {
    commit(&file, config, |session| session.revise(&id, &notes))
}

pub fn resubmit(
    file: PathBuf,
    config: &QueueConfig,
    id: String,
) -> Result<(), Box<dyn std::error::Error>> {
    commit(&file, config, |session| session.resubmit(&id))
}
