use super::{Project, Selection};
use crate::filter;
use crate::loaders::{self, LoadError, Loader};
use crate::stats::{self, Summary};
use std::path::Path;
use tracing::{debug, info};

/// Loaded dataset and the skill filters applied to it.
#[derive(Debug, Default)]
pub struct Session {
    projects: Vec<Project>,
    selection: Selection,
}

impl Session {
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the dataset wholesale and clear every skill filter.
    pub fn replace_dataset(&mut self, projects: Vec<Project>) -> &[Project] {
        debug!(
            previous = self.projects.len(),
            projects = projects.len(),
            "replacing dataset"
        );
        self.projects = projects;
        self.selection.clear();
        &self.projects
    }

    /// Parse uploaded content. On failure the current dataset and selection
    /// are left as they were.
    pub fn load_dataset(&mut self, contents: &[u8]) -> Result<&[Project], LoadError> {
        let projects = loaders::parse_bytes(contents)?;
        info!(projects = projects.len(), "dataset loaded");
        Ok(self.replace_dataset(projects))
    }

    /// Check the file type, read the file, then load its content.
    pub async fn load_file(&mut self, path: &Path) -> Result<&[Project], LoadError> {
        let contents = Loader::new(path)?.read().await?;
        self.load_dataset(&contents)
    }

    /// Returns whether `skill` is selected after the toggle.
    pub fn toggle_skill_filter(&mut self, skill: &str) -> bool {
        self.selection.toggle(skill)
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        filter::visible(&self.projects, &self.selection)
    }

    pub fn skill_vocabulary(&self) -> Vec<&str> {
        filter::vocabulary(&self.projects)
    }

    pub fn visible_summary(&self) -> Summary {
        stats::summarize(self.visible_projects())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORTFOLIO: &[u8] = b"project_name,skills,impact_score\nOne,A,2\nTwo,B,4\nThree,\"A, B\",9\n";

    fn names(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.project_name.clone()).collect()
    }

    #[test]
    fn filters_and_summarizes_visible_projects() {
        let mut session = Session::default();
        session.load_dataset(PORTFOLIO).unwrap();
        assert_eq!(session.skill_vocabulary(), vec!["A", "B"]);
        session.toggle_skill_filter("A");
        assert_eq!(names(&session.visible_projects()), vec!["One", "Three"]);
        let summary = session.visible_summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.avg_impact, 5.5);
        // Filtering does not shrink the vocabulary.
        assert_eq!(session.skill_vocabulary(), vec!["A", "B"]);
    }

    #[test]
    fn new_dataset_resets_selection() {
        let mut session = Session::default();
        session.load_dataset(PORTFOLIO).unwrap();
        session.toggle_skill_filter("B");
        let projects = session.load_dataset(b"name,skills\nSolo,C\n").unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id.to_string(), "p-0");
        assert!(session.selection().is_empty());
        assert_eq!(names(&session.visible_projects()), vec!["Solo"]);
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut session = Session::default();
        session.load_dataset(PORTFOLIO).unwrap();
        session.toggle_skill_filter("B");
        assert!(session.load_dataset(b"name\n\xc3\x28\n").is_err());
        assert_eq!(session.projects().len(), 3);
        assert!(session.selection().contains("B"));
    }

    #[tokio::test]
    async fn invalid_file_type_keeps_previous_state() {
        let mut session = Session::default();
        session.load_dataset(PORTFOLIO).unwrap();
        let err = session.load_file(Path::new("portfolio.xlsx")).await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidFileType(_)));
        assert_eq!(session.projects().len(), 3);
    }

    #[test]
    fn empty_session() {
        let session = Session::default();
        assert!(session.visible_projects().is_empty());
        assert!(session.skill_vocabulary().is_empty());
        assert_eq!(session.visible_summary().avg_impact, 0.0);
    }
}
