use indexmap::IndexSet;

/// Skill tags currently toggled on, kept in toggle order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    skills: IndexSet<String>,
}

impl Selection {
    /// Add `skill` if absent, remove it if present. Returns whether the
    /// skill is selected afterwards.
    pub fn toggle(&mut self, skill: &str) -> bool {
        if self.skills.shift_remove(skill) {
            false
        } else {
            self.skills.insert(skill.to_owned());
            true
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn clear(&mut self) {
        self.skills.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }
}
