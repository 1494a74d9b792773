use crate::chart::{self, Timeline};
use crate::model::{Project, Session};
use crate::stats::Summary;

pub fn display_filters(session: &Session) {
    let vocabulary = session.skill_vocabulary();
    if vocabulary.is_empty() {
        println!("Skills: none in dataset");
        return;
    }
    println!("Skills:");
    for skill in vocabulary {
        let mark = if session.selection().contains(skill) { "x" } else { " " };
        println!("  [{mark}] {skill}");
    }
    if !session.selection().is_empty() {
        println!(
            "Filtering on {} skill(s): {}",
            session.selection().len(),
            session.selection().iter().collect::<Vec<_>>().join(", ")
        );
    }
    println!();
}

pub fn display_distribution(summary: &Summary) {
    println!("Skill distribution:");
    for share in chart::skill_distribution(summary) {
        println!(
            "  - {}: {} ({:.1}%)",
            share.skill,
            share.count,
            100.0 * share.share
        );
    }
    println!();
}

/// Render one bar; every project gets at least one cell.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn bar(fraction: f64, width: usize) -> String {
    let cells = ((fraction * width as f64).round() as usize).clamp(1, width.max(1));
    "#".repeat(cells)
}

pub fn display_timeline(timeline: &Timeline<'_>, width: usize) {
    let label_width = timeline
        .bars
        .iter()
        .map(|b| b.project.project_name.chars().count())
        .max()
        .unwrap_or(0);
    let ticks = timeline
        .ticks
        .iter()
        .map(|t| format!("{t}m"))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("Project timeline (months): {ticks}");
    for b in &timeline.bars {
        println!(
            "  {:>label_width$} {} {}",
            b.project.project_name,
            bar(b.fraction, width),
            b.project.duration_months
        );
    }
    println!();
}

pub fn display_stats(summary: &Summary) {
    println!("Projects: {}", summary.total);
    println!("Average impact score: {:.2}", summary.avg_impact);
}

pub fn display_report(
    session: &Session,
    visible: &[&Project],
    summary: &Summary,
    width: usize,
    details: bool,
) {
    display_filters(session);
    if visible.is_empty() {
        println!("Upload a CSV to see charts and metrics.");
        return;
    }
    display_distribution(summary);
    if details {
        display_timeline(&chart::timeline(visible), width);
    }
    display_stats(summary);
}
