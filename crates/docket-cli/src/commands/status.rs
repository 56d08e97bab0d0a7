//! Status command - show queue statistics and facet counts.

use std::path::PathBuf;

use colored::Colorize;
use docket::presentation::Presenter;
use docket::{FacetCounts, QueueConfig};

use super::{open_session, paint};

pub fn run(
    file: PathBuf,
    config: &QueueConfig,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(&file, config)?;
    let queue = session.queue();
    let stats = queue.statistics();
    let facets = FacetCounts::collect(queue.items());

    if json_output {
        let status = serde_json::json!({
            "file": file.display().to_string(),
            "statistics": stats,
            "progress": stats.progress(),
            "facets": facets,
            "transitions": queue.history().len(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Review queue".cyan().bold(),
        file.display().to_string().white()
    );
    println!();

    // Progress bar
    let progress = stats.progress();
    let bar_width = 30;
    let filled = (progress * bar_width as f64).round() as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);
    println!(
        "Progress: {} {}/{} ({:.0}%)",
        bar.cyan(),
        stats.decided().to_string().white().bold(),
        stats.total,
        progress * 100.0
    );
    println!();

    let presenter = Presenter::new(session.vocabulary(), queue.policy());
    println!("{}", "Status:".yellow().bold());
    for card in presenter.stat_cards(&stats) {
        println!(
            "  {:16} {}",
            format!("{}:", card.label),
            paint(&card.value.to_string(), card.tone)
        );
    }
    println!();

    println!("{}", "By category:".yellow().bold());
    for (category, count) in &facets.by_category {
        println!("  {:16} {}", format!("{}:", category), count);
    }
    println!();

    println!("{}", "By priority:".yellow().bold());
    for (priority, count) in &facets.by_priority {
        let badge = presenter.priority_badge(*priority);
        println!(
            "  {:16} {}",
            format!("{}:", badge.label),
            paint(&count.to_string(), badge.tone)
        );
    }
    println!();

    println!("{}", "By document type:".yellow().bold());
    for (document_type, count) in &facets.by_document_type {
        println!(
            "  {:16} {}",
            format!("{}:", session.vocabulary().document_type_label(*document_type)),
            count
        );
    }
    println!();

    if stats.open() == 0 {
        println!("{}", "All items have been decided!".green().bold());
    } else {
        println!(
            "Run {} to see pending items.",
            format!("docket list {} --status pending", file.display())
                .cyan()
                .bold()
        );
    }

    Ok(())
}
