//! Show command - one item in detail.

use std::path::PathBuf;

use colored::Colorize;
use docket::{ExtractedData, QueueConfig};

use super::{open_for_review, paint};

pub fn run(
    file: PathBuf,
    config: &QueueConfig,
    id: String,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_for_review(&file, config, false)?;
    let card = session.view_detail(&id)?;

    if json_output {
        let item = session.queue().get(&id);
        let detail = serde_json::json!({
            "card": card,
            "item": item,
            "history": session.queue().history_for(&id),
        });
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("{} {}", format!("[{}]", card.id).white().bold(), card.title.bold());
    println!();
    println!("  Status:       {}", paint(&card.status.label, card.status.tone));
    println!("  Priority:     {}", paint(&card.priority.label, card.priority.tone));
    println!("  Type:         {}", card.document_type);
    println!("  Category:     {}", card.category);
    println!("  Submitted by: {}", card.submitted_by);
    println!("  Submitted:    {}", card.submitted_date);
    println!("  Confidence:   {}", card.confidence);
    if let Some(reviewer) = &card.assigned_to {
        println!("  Reviewer:     {}", reviewer);
    }

    if let Some(item) = session.queue().get(&id) {
        println!();
        println!("{}", "Extracted data:".yellow().bold());
        match &item.payload {
            ExtractedData::LegalText { text_type, sector } => {
                println!("  Text type:    {}", text_type);
                println!("  Sector:       {}", sector);
            }
            ExtractedData::Procedure {
                category,
                institution,
            } => {
                println!("  Category:     {}", category);
                println!("  Institution:  {}", institution);
            }
        }
    }

    let history = session.queue().history_for(&id);
    if !history.is_empty() {
        println!();
        println!("{}", "History:".yellow().bold());
        for record in history {
            println!(
                "  {} {} {} → {}{}",
                record.at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                record.action.label(),
                record.from,
                record.to,
                record
                    .note
                    .as_deref()
                    .map(|n| format!(" ({})", n))
                    .unwrap_or_default()
            );
        }
    }

    if !card.actions.is_empty() {
        println!();
        let actions: Vec<&str> = card.actions.iter().map(|a| a.label()).collect();
        println!("{} {}", "Available:".cyan(), actions.join(", "));
    }

    Ok(())
}
