//! History command - transition audit trail.

use std::path::PathBuf;

use colored::Colorize;
use docket::TransitionRecord;

use crate::store;

pub fn run(
    file: PathBuf,
    id: Option<String>,
    backup: Option<usize>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Queue file not found: {}", file.display()).into());
    }

    let snapshot = match backup {
        Some(index) => store::load_history(&file, index)?,
        None => store::load(&file)?,
    };

    let records: Vec<&TransitionRecord> = snapshot
        .history
        .iter()
        .filter(|record| id.as_deref().is_none_or(|id| record.item_id.as_str() == id))
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "No transitions recorded.".dimmed());
    }

    for record in &records {
        let actor = record
            .actor
            .as_deref()
            .map(|a| format!(" by {}", a))
            .unwrap_or_default();
        let note = record
            .note
            .as_deref()
            .map(|n| format!(": {}", n))
            .unwrap_or_default();

        println!(
            "{} {} {} {} {} → {}{}{}",
            record.id.dimmed(),
            record.at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
            format!("[{}]", record.item_id).white().bold(),
            record.action.label().cyan(),
            record.from,
            record.to,
            actor,
            note
        );
    }

    let backups = store::list_history(&file)?;
    if backup.is_none() && !backups.is_empty() {
        println!();
        println!(
            "{} backup(s) in history; use {} to inspect one.",
            backups.len(),
            "--backup N".cyan()
        );
    }

    Ok(())
}
