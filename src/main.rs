use crate::config::Config;
use crate::export::ExportFormat;
use crate::model::Session;
use clap::{ArgAction, Parser};
use eyre::{Result, WrapErr};
use std::path::PathBuf;
use tracing::{Level, info, warn};

mod chart;
mod checks;
mod config;
mod display;
mod export;
mod filter;
mod loaders;
mod model;
mod normalize;
mod stats;
mod tokenizer;

#[derive(Parser)]
#[command(author, version, about)]
struct Options {
    /// Use FILE instead of portfolio-insights.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Toggle a skill filter (repeatable, applied in order)
    #[arg(short, long = "skill", value_name = "SKILL")]
    skills: Vec<String>,
    /// Write the export to FILE
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Export format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,
    /// Do not write the export file
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
    /// CSV file with project_name, skills, duration_months, impact_score columns
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = Config::load_or_default(options.config.as_deref()).await?;

    let mut session = Session::default();
    if let Err(e) = session.load_file(&options.file).await {
        let message = e.user_message();
        return Err(e).wrap_err(message);
    }
    checks::check_impact_range(session.projects());
    checks::check_durations(session.projects());

    let vocabulary = session
        .skill_vocabulary()
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    for skill in config.filter.skills.iter().chain(&options.skills) {
        if !vocabulary.contains(skill) {
            warn!(skill = %skill, "skill does not appear in the dataset");
        }
        session.toggle_skill_filter(skill);
    }

    let visible = session.visible_projects();
    let summary = session.visible_summary();
    display::display_report(
        &session,
        &visible,
        &summary,
        config.display.timeline_width,
        config.display.details,
    );

    let format = options.format.unwrap_or(config.export.format);
    let content = export::export(&visible, format, config.export.pretty)?;
    let output = options.output.unwrap_or(config.export.file);
    if options.dry_run {
        info!(path = %output.display(), "dry run, export not written");
    } else {
        export::write_export(&output, &content).await?;
    }
    Ok(())
}
