use crate::model::Project;
use indexmap::IndexMap;
use tracing::{instrument, trace};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Skill instances per tag, in first-seen order.
    pub skill_counts: IndexMap<String, usize>,
    pub avg_impact: f64,
    pub total: usize,
}

impl Summary {
    /// Number of skill instances counted, duplicates included.
    pub fn skill_instances(&self) -> usize {
        self.skill_counts.values().sum()
    }
}

/// Summarize a set of projects. A skill listed twice on one project counts
/// twice.
#[instrument(skip_all)]
#[allow(clippy::cast_precision_loss)]
pub fn summarize<'a, I>(projects: I) -> Summary
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut skill_counts = IndexMap::<String, usize>::new();
    let mut total_impact = 0.0;
    let mut total = 0;
    for project in projects {
        total += 1;
        total_impact += project.impact_score;
        for skill in &project.skills {
            *skill_counts.entry(skill.clone()).or_default() += 1;
        }
    }
    let avg_impact = if total == 0 {
        0.0
    } else {
        total_impact / total as f64
    };
    trace!(total, skills = skill_counts.len(), avg_impact, "summarized");
    Summary {
        skill_counts,
        avg_impact,
        total,
    }
}
