//! Batch command - approve or reject many pending items at once.

use std::path::PathBuf;

use colored::Colorize;
use docket::{
    DocketError, Facet, FilterCriteria, QueueConfig, RawCriteria, ReviewSession, ReviewStatus,
    Vocabulary,
};

use crate::cli::FilterArgs;

use super::{open_for_review, persist};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    config: &QueueConfig,
    approve: bool,
    reject: bool,
    filters: FilterArgs,
    all: bool,
    reason: String,
    user: String,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !approve && !reject {
        return Err("Must specify --approve or --reject".into());
    }

    let mut session = open_for_review(&file, config, verbose)?;
    let criteria = batch_criteria(&filters.to_raw(), all, session.vocabulary())?;

    let matching: Vec<String> = docket::filter(session.queue().items(), &criteria)
        .into_iter()
        .map(|item| item.id.to_string())
        .collect();

    if matching.is_empty() {
        println!(
            "{} No pending items match the filter criteria.",
            "Note:".yellow()
        );
        return Ok(());
    }

    let action_word = if approve { "Approving" } else { "Rejecting" };
    println!(
        "{} {} item(s)...",
        action_word.cyan().bold(),
        matching.len().to_string().white().bold()
    );

    let (count, failures) = apply_to(&mut session, &matching, approve, &user, &reason);

    if count > 0 {
        persist(&session, &file)?;
    }

    println!();
    println!(
        "{} {} item(s) {}",
        "Done:".green().bold(),
        count.to_string().white().bold(),
        if approve { "approved" } else { "rejected" }
    );

    let remaining = session.queue().pending_items().len();
    if remaining > 0 {
        println!("  {} pending item(s) remaining", remaining.to_string().yellow());
    } else {
        println!("  {} No pending items left!", "✓".green());
    }

    if !failures.is_empty() {
        for (id, e) in &failures {
            eprintln!("  {} [{}] {}", "✗".red(), id, e);
        }
        let saved = if count > 0 { "saved" } else { "nothing saved" };
        return Err(format!(
            "{} item(s) failed; {} committed item(s) {}",
            failures.len(),
            count,
            saved
        )
        .into());
    }

    Ok(())
}

/// Run the action on each id, continuing past failures.
///
/// Returns how many items committed and the ids that failed.
fn apply_to(
    session: &mut ReviewSession,
    ids: &[String],
    approve: bool,
    user: &str,
    reason: &str,
) -> (usize, Vec<(String, DocketError)>) {
    let mut count = 0;
    let mut failures = Vec::new();
    for id in ids {
        let result = if approve {
            session.approve_by(id, user, None).map(|_| ())
        } else {
            session.reject_by(id, user, reason).map(|_| ())
        };
        match result {
            Ok(()) => count += 1,
            Err(e) => failures.push((id.clone(), e)),
        }
    }
    (count, failures)
}

/// Criteria selecting the items a batch acts on.
///
/// Only pending items are ever selected. A `--status` other than pending
/// is an error, as is any value that fails to parse or a filter set that
/// selects everything without `--all`.
fn batch_criteria(
    raw: &RawCriteria,
    all: bool,
    vocabulary: &Vocabulary,
) -> docket::Result<FilterCriteria> {
    let parsed = FilterCriteria::parse(raw, vocabulary);
    if let Some(issue) = parsed.issues.into_iter().next() {
        return Err(issue);
    }

    let criteria = parsed.criteria;
    if !all && criteria.is_unfiltered() {
        return Err(DocketError::Validation(
            "Must specify --all, or at least one of --search, --category, --priority, --type, --status"
                .to_string(),
        ));
    }

    match criteria.status {
        Facet::Only(status) if status != ReviewStatus::Pending => {
            Err(DocketError::Validation(format!(
                "Batch actions apply to pending items only, not {}",
                status
            )))
        }
        _ => Ok(criteria.with_status(ReviewStatus::Pending)),
    }
}
