use crate::model::Project;
use clap::ValueEnum;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

pub const DEFAULT_EXPORT_FILE: &str = "portfolio-insights.json";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// JSON array of the given projects, indented by two spaces when `pretty`.
pub fn export_json(projects: &[&Project], pretty: bool) -> Result<Vec<u8>, serde_json::Error> {
    if pretty {
        serde_json::to_vec_pretty(projects)
    } else {
        serde_json::to_vec(projects)
    }
}

/// CSV with the input column names, readable back by this tool.
pub fn export_csv(projects: &[&Project]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "project_name",
        "skills",
        "duration_months",
        "impact_score",
    ])?;
    for p in projects {
        writer.write_record([
            p.id.to_string(),
            p.project_name.clone(),
            p.skills.join(", "),
            p.duration_months.to_string(),
            p.impact_score.to_string(),
        ])?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

pub fn export(projects: &[&Project], format: ExportFormat, pretty: bool) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => export_json(projects, pretty).wrap_err("cannot serialize projects"),
        ExportFormat::Csv => export_csv(projects),
    }
}

pub async fn write_export(path: &Path, content: &[u8]) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .wrap_err_with(|| format!("cannot write export file {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "export written");
    Ok(())
}
