use crate::model::{Project, ProjectId};
use crate::tokenizer::Table;
use tracing::{debug, instrument, trace};

/// Recognized input columns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Column {
    ProjectName,
    Skills,
    Duration,
    Impact,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::ProjectName,
        Column::Skills,
        Column::Duration,
        Column::Impact,
    ];

    /// Header names tried in order; the first non-blank cell wins.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Column::ProjectName => &["project_name", "name"],
            Column::Skills => &["skills"],
            Column::Duration => &["duration_months", "duration"],
            Column::Impact => &["impact_score", "impact"],
        }
    }
}

/// Recognized cells of one data row. Blank cells are `None`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RawRow<'a> {
    pub project_name: Option<&'a str>,
    pub skills: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub impact: Option<&'a str>,
}

/// Column indexes of every candidate header, resolved once per table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Columns {
    indexes: [Vec<usize>; 4],
}

impl Columns {
    pub fn resolve(headers: &[String]) -> Self {
        let indexes = Column::ALL.map(|column| {
            column
                .candidates()
                .iter()
                // A repeated header reads from its right-most column.
                .filter_map(|name| headers.iter().rposition(|h| h == name))
                .collect()
        });
        let columns = Self { indexes };
        for column in Column::ALL {
            if columns.indexes_of(column).is_empty() {
                debug!(?column, "no header for column, using defaults");
            }
        }
        columns
    }

    fn indexes_of(&self, column: Column) -> &[usize] {
        &self.indexes[column as usize]
    }

    fn cell<'a>(&self, column: Column, row: &'a [String]) -> Option<&'a str> {
        self.indexes_of(column)
            .iter()
            .filter_map(|&idx| row.get(idx))
            .map(String::as_str)
            .find(|cell| !cell.is_empty())
    }

    pub fn read<'a>(&self, row: &'a [String]) -> RawRow<'a> {
        RawRow {
            project_name: self.cell(Column::ProjectName, row),
            skills: self.cell(Column::Skills, row),
            duration: self.cell(Column::Duration, row),
            impact: self.cell(Column::Impact, row),
        }
    }
}

fn parse_radix(value: &str) -> Option<f64> {
    let (radix, digits) = match value.get(..2)? {
        "0x" | "0X" => (16, &value[2..]),
        "0o" | "0O" => (8, &value[2..]),
        "0b" | "0B" => (2, &value[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    // Accumulate in f64 so that literals wider than 64 bits stay finite.
    digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Lenient numeric coercion: anything that is not a finite number is 0.
pub fn coerce_number(value: Option<&str>) -> f64 {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0.0;
    };
    match parse_radix(value).or_else(|| value.parse::<f64>().ok()) {
        // Also folds -0 into 0.
        Some(n) if n.is_finite() && n != 0.0 => n,
        Some(_) => 0.0,
        None => {
            trace!(value, "not a number, using 0");
            0.0
        }
    }
}

/// Split a skills cell on commas, dropping empty pieces.
pub fn split_skills(cell: Option<&str>) -> Vec<String> {
    cell.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Build a project from one row. Never fails: missing or malformed cells
/// fall back to defaults.
pub fn normalize_row(row: &RawRow<'_>, position: usize) -> Project {
    Project {
        id: ProjectId(position),
        project_name: row
            .project_name
            .map_or_else(|| format!("Project {}", position + 1), String::from),
        duration_months: coerce_number(row.duration),
        impact_score: coerce_number(row.impact),
        skills: split_skills(row.skills),
    }
}

#[instrument(skip_all)]
pub fn normalize(table: &Table) -> Vec<Project> {
    let columns = Columns::resolve(&table.headers);
    let projects = table
        .rows
        .iter()
        .enumerate()
        .map(|(position, row)| normalize_row(&columns.read(row), position))
        .collect::<Vec<_>>();
    debug!(projects = projects.len(), "normalized rows");
    projects
}
