//! List command - filtered, paginated item cards.

use std::path::PathBuf;

use colored::Colorize;
use docket::QueueConfig;
use docket::presentation::DashboardView;

use crate::cli::FilterArgs;

use super::{open_session, paint};

pub fn run(
    file: PathBuf,
    config: &QueueConfig,
    filters: FilterArgs,
    page: usize,
    page_size: Option<usize>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(&file, config)?;

    for issue in session.apply_raw_criteria(&filters.to_raw()) {
        eprintln!("{} {} (ignored)", "Warning:".yellow(), issue);
    }
    if let Some(size) = page_size {
        session.set_page_size(size)?;
    }
    session.set_page(page);

    let view = session.view();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_view(&view);
    Ok(())
}

fn print_view(view: &DashboardView) {
    let counters: Vec<String> = view
        .stats
        .iter()
        .map(|s| format!("{} {}", s.label, paint(&s.value.to_string(), s.tone)))
        .collect();
    println!("{}", counters.join("  "));
    println!();

    if !view.tabs.is_empty() {
        let tabs: Vec<String> = view
            .tabs
            .iter()
            .map(|t| {
                let label = format!("{} ({})", t.label, t.count);
                if t.active {
                    label.cyan().bold().underline().to_string()
                } else {
                    label.dimmed().to_string()
                }
            })
            .collect();
        println!("{}", tabs.join("   "));
        println!();
    }

    if let Some(message) = &view.empty_message {
        println!("  {}", message.dimmed());
        return;
    }

    for card in &view.cards {
        println!(
            "{} {}  {}  {}",
            format!("[{}]", card.id).white().bold(),
            card.title.bold(),
            paint(&card.status.label, card.status.tone),
            paint(&card.priority.label, card.priority.tone),
        );
        let mut details = format!(
            "    {} · {} · {} · {} · {}",
            card.document_type, card.category, card.submitted_by, card.submitted_date, card.confidence
        );
        if let Some(reviewer) = &card.assigned_to {
            details.push_str(&format!(" · {}", reviewer));
        }
        println!("{}", details.dimmed());
        if !card.actions.is_empty() {
            let actions: Vec<&str> = card.actions.iter().map(|a| a.label()).collect();
            println!("    {} {}", "→".cyan(), actions.join(", "));
        }
    }

    println!();
    if let Some((first, last)) = view.showing {
        println!(
            "Showing {}-{} of {} · page {}/{}",
            first, last, view.matching, view.page, view.total_pages
        );
    }
}
