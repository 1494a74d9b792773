//! Chart-ready views of a project set: skill distribution shares and the
//! duration timeline.

use crate::model::Project;
use crate::stats::Summary;

const TICKS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Clone, Debug, PartialEq)]
pub struct SkillShare<'a> {
    pub skill: &'a str,
    pub count: usize,
    /// Fraction of all skill instances, 0 when there are none.
    pub share: f64,
}

#[allow(clippy::cast_precision_loss)]
pub fn skill_distribution(summary: &Summary) -> Vec<SkillShare<'_>> {
    let total = summary.skill_instances();
    summary
        .skill_counts
        .iter()
        .map(|(skill, &count)| SkillShare {
            skill,
            count,
            share: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineBar<'a> {
    pub project: &'a Project,
    /// Bar length relative to the longest project, within `[0, 1]`.
    pub fraction: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<'a> {
    /// Longest duration, never below one month.
    pub max_duration: f64,
    /// Axis labels in months at 0, 1/4, 1/2, 3/4 and all of `max_duration`.
    pub ticks: Vec<f64>,
    pub bars: Vec<TimelineBar<'a>>,
}

pub fn timeline<'a>(projects: &[&'a Project]) -> Timeline<'a> {
    let max_duration = projects
        .iter()
        .map(|p| p.duration_months)
        .fold(1.0, f64::max);
    let ticks = TICKS.iter().map(|t| (max_duration * t).round()).collect();
    let bars = projects
        .iter()
        .map(|&project| TimelineBar {
            project,
            fraction: (project.duration_months.min(max_duration) / max_duration).max(0.0),
        })
        .collect();
    Timeline {
        max_duration,
        ticks,
        bars,
    }
}
