use serde::{Serialize, Serializer};
use std::fmt;

/// Position-derived identifier, rendered as `p-<position>`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProjectId(pub usize);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p-{}", self.0)
    }
}

impl Serialize for ProjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub project_name: String,
    #[serde(serialize_with = "serialize_number")]
    pub duration_months: f64,
    #[serde(serialize_with = "serialize_number")]
    pub impact_score: f64,
    pub skills: Vec<String>,
}

impl Project {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.project_name, self.id)
    }
}

/// Largest magnitude below which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Write integral values without a fractional part (`12` rather than `12.0`).
#[allow(clippy::cast_possible_truncation, clippy::trivially_copy_pass_by_ref)]
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha() -> Project {
        Project {
            id: ProjectId(0),
            project_name: "Alpha".into(),
            duration_months: 12.0,
            impact_score: 7.5,
            skills: vec!["Go".into(), "Rust".into()],
        }
    }

    #[test]
    fn id_is_position_tag() {
        assert_eq!(ProjectId(3).to_string(), "p-3");
    }

    #[test]
    fn serializes_in_export_shape() {
        let json = serde_json::to_value(alpha()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "p-0",
                "project_name": "Alpha",
                "duration_months": 12,
                "impact_score": 7.5,
                "skills": ["Go", "Rust"],
            })
        );
        let text = serde_json::to_string(&alpha()).unwrap();
        assert!(text.contains("\"duration_months\":12,"));
    }

    #[test]
    fn skill_membership() {
        let p = alpha();
        assert!(p.has_skill("Rust"));
        assert!(!p.has_skill("rust"));
    }
}
