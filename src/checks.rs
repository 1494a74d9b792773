use crate::model::Project;
use std::ops::RangeInclusive;
use tracing::warn;

pub const IMPACT_RANGE: RangeInclusive<f64> = 1.0..=10.0;

/// Projects whose impact score lies outside [`IMPACT_RANGE`]. They are kept
/// as loaded; this only reports them.
pub fn check_impact_range(projects: &[Project]) -> Vec<&Project> {
    let outliers = projects
        .iter()
        .filter(|p| !IMPACT_RANGE.contains(&p.impact_score))
        .collect::<Vec<_>>();
    for p in &outliers {
        warn!(project = %p, impact_score = p.impact_score, "impact score outside 1-10");
    }
    outliers
}

pub fn check_durations(projects: &[Project]) -> Vec<&Project> {
    let negative = projects
        .iter()
        .filter(|p| p.duration_months < 0.0)
        .collect::<Vec<_>>();
    for p in &negative {
        warn!(project = %p, duration_months = p.duration_months, "negative duration");
    }
    negative
}
