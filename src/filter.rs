use crate::model::{Project, Selection};
use std::collections::BTreeSet;

/// Projects carrying at least one selected skill. An empty selection keeps
/// everything.
pub fn visible<'a>(projects: &'a [Project], selection: &Selection) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| selection.is_empty() || selection.iter().any(|skill| p.has_skill(skill)))
        .collect()
}

/// Distinct skills of the whole dataset, sorted case-insensitively. Skills
/// differing only in case are ordered by code point.
pub fn vocabulary(projects: &[Project]) -> Vec<&str> {
    let mut skills = projects
        .iter()
        .flat_map(|p| p.skills.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    skills.sort_by_cached_key(|s| s.to_lowercase());
    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectId;

    fn dataset() -> Vec<Project> {
        [vec!["A"], vec!["B"], vec!["A", "B"]]
            .iter()
            .enumerate()
            .map(|(idx, skills)| Project {
                id: ProjectId(idx),
                project_name: format!("Project {}", idx + 1),
                duration_months: 0.0,
                impact_score: 0.0,
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect()
    }

    fn ids(projects: &[&Project]) -> Vec<usize> {
        projects.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn empty_selection_keeps_everything() {
        let projects = dataset();
        assert_eq!(ids(&visible(&projects, &Selection::default())), vec![0, 1, 2]);
    }

    #[test]
    fn selected_skills_match_with_or() {
        let projects = dataset();
        let mut selection = Selection::default();
        selection.toggle("A");
        assert_eq!(ids(&visible(&projects, &selection)), vec![0, 2]);
        selection.toggle("B");
        assert_eq!(ids(&visible(&projects, &selection)), vec![0, 1, 2]);
        selection.toggle("A");
        assert_eq!(ids(&visible(&projects, &selection)), vec![1, 2]);
    }

    #[test]
    fn unknown_skill_hides_everything() {
        let projects = dataset();
        let mut selection = Selection::default();
        selection.toggle("Z");
        assert!(visible(&projects, &selection).is_empty());
    }

    #[test]
    fn vocabulary_is_sorted_and_distinct() {
        let mut projects = dataset();
        projects[0].skills = vec!["Rust".into(), "Go".into(), "Go".into()];
        assert_eq!(vocabulary(&projects), vec!["A", "B", "Go", "Rust"]);
        assert!(vocabulary(&[]).is_empty());
    }

    #[test]
    fn vocabulary_ignores_case_when_sorting() {
        let mut projects = dataset();
        projects[0].skills = vec!["go".into(), "a".into(), "Rust".into(), "Go".into()];
        projects[1].skills = vec!["B".into()];
        projects[2].skills = vec![];
        assert_eq!(vocabulary(&projects), vec!["a", "B", "Go", "go", "Rust"]);
    }
}
