//! Example: Walk the OCR approval dashboard through a review session.
//!
//! Usage:
//!   cargo run --example review_queue

use chrono::NaiveDate;

use docket::queue::ReviewObserver;
use docket::{
    ExtractedData, FilterCriteria, Priority, QueueConfig, ReviewItem, ReviewSession, ReviewStatus,
    Vocabulary,
};

/// Prints every callback as it happens.
struct PrintObserver;

impl ReviewObserver for PrintObserver {
    fn on_approve(&self, item: &ReviewItem, comment: Option<&str>) {
        println!("  -> approved {} ({})", item.id, comment.unwrap_or("no comment"));
    }

    fn on_reject(&self, item: &ReviewItem, reason: &str) {
        println!("  -> rejected {}: {}", item.id, reason);
    }

    fn on_revision(&self, item: &ReviewItem, notes: &str) {
        println!("  -> revision requested for {}: {}", item.id, notes);
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, d).unwrap_or_default()
}

fn demo_items() -> Vec<ReviewItem> {
    vec![
        ReviewItem::new("1", "Loi relative aux investissements", ExtractedData::legal_text("Loi", "Finance"))
            .with_extraction_date(day(12))
            .with_confidence(94)
            .with_submitted_by("Système OCR-IA")
            .with_priority(Priority::High)
            .with_category("Finance"),
        ReviewItem::new(
            "2",
            "Décret exécutif modalités application",
            ExtractedData::legal_text("Décret exécutif", "Justice"),
        )
        .with_extraction_date(day(11))
        .with_confidence(87)
        .with_submitted_by("Système OCR-IA")
        .with_category("Justice")
        .with_status(ReviewStatus::UnderReview, Some("Dr. Amina Khelifi")),
        ReviewItem::new(
            "3",
            "Procédure création entreprise SARL",
            ExtractedData::procedure("Commerce", "Ministère du Commerce"),
        )
        .with_extraction_date(day(10))
        .with_confidence(91)
        .with_submitted_by("Système OCR-IA")
        .with_category("Commerce")
        .with_status(ReviewStatus::Approved, Some("M. Karim Benaissa")),
        ReviewItem::new(
            "4",
            "Arrêté ministériel normes environnementales",
            ExtractedData::legal_text("Arrêté ministériel", "Environnement"),
        )
        .with_extraction_date(day(9))
        .with_confidence(83)
        .with_submitted_by("Système OCR-IA")
        .with_priority(Priority::Low)
        .with_category("Environnement")
        .with_status(ReviewStatus::NeedsRevision, Some("Dr. Leila Mansouri")),
        ReviewItem::new(
            "5",
            "Procédure demande passeport biométrique",
            ExtractedData::procedure("Administration", "Ministère de l'Intérieur"),
        )
        .with_extraction_date(day(8))
        .with_confidence(96)
        .with_submitted_by("Système OCR-IA")
        .with_priority(Priority::High)
        .with_category("Administration")
        .with_status(ReviewStatus::Approved, Some("Mme. Fatima Benali")),
    ]
}

fn print_dashboard(session: &mut ReviewSession) {
    let view = session.view();

    let counters: Vec<String> = view
        .stats
        .iter()
        .map(|s| format!("{}: {}", s.label, s.value))
        .collect();
    println!("{}", counters.join(" | "));

    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|t| format!("{}{} ({})", if t.active { "*" } else { "" }, t.label, t.count))
        .collect();
    if !tabs.is_empty() {
        println!("{}", tabs.join("  "));
    }

    for card in &view.cards {
        println!(
            "  [{}] {:45} {:12} {:8} {:>4}  {}",
            card.id, card.title, card.status.label, card.priority.label, card.confidence, card.submitted_date
        );
    }
    if let Some(message) = &view.empty_message {
        println!("  {}", message);
    }
    println!("Page {}/{}", view.page, view.total_pages);
    println!();
}

fn main() -> docket::Result<()> {
    let config = QueueConfig::default().with_vocabulary(Vocabulary::french_legal());
    let mut session = ReviewSession::from_items(demo_items(), config)?;
    session.subscribe(PrintObserver);

    println!("## Initial queue");
    print_dashboard(&mut session);

    println!("## Review actions");
    session.approve_by("1", "Dr. Amina Khelifi", Some("Conforme au JO"))?;
    session.revise("2", "Article 4 tronqué")?;
    session.resubmit("4")?;
    session.reject("4", "Motif à préciser")?;
    if let Err(e) = session.approve("4", None) {
        println!("  refused: {}", e);
    }
    println!();

    println!("## Procedures only");
    session.set_criteria(FilterCriteria::new());
    session.select_tab(docket::Facet::Only(docket::DocumentType::Procedure));
    print_dashboard(&mut session);

    println!("## History");
    for record in session.queue().history() {
        println!(
            "  {} item {}: {} -> {} ({})",
            record.id,
            record.item_id,
            record.from,
            record.to,
            record.note.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
