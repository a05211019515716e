use eyre::{Result, WrapErr};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use studykit_core::models::course::Course;

use super::{LoadReport, RosterStore, SkippedRecord, read_optional};

/// Course roster stored as `name,credit,marks` lines.
///
/// Commas inside a course name are not escaped; such a line reads back with
/// the wrong field count and is skipped.
#[derive(Debug, Clone)]
pub struct RosterFile {
    path: PathBuf,
}

impl RosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for RosterFile {
    fn load_roster(&self) -> Result<LoadReport<Course>> {
        tracing::debug!("Loading roster from {}", self.path.display());
        let Some(text) = read_optional(&self.path)? else {
            tracing::debug!("Roster file not found: {}", self.path.display());
            return Ok(LoadReport::missing());
        };

        let report = parse_roster(&text);
        for skipped in &report.skipped {
            tracing::warn!(
                "Skipping roster line {}: {}",
                skipped.position,
                skipped.reason
            );
        }
        tracing::debug!(
            "Roster loaded: {} course(s), {} skipped",
            report.records.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    fn save_roster(&self, courses: &[Course]) -> Result<()> {
        let mut out = String::new();
        for course in courses {
            if course.name().contains(',') {
                tracing::warn!(
                    "Course name {:?} contains a comma and will not load back",
                    course.name()
                );
            }
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{},{},{}", course.name(), course.credit(), course.marks());
        }

        std::fs::write(&self.path, out)
            .wrap_err_with(|| format!("Unable to save roster to {}", self.path.display()))?;
        tracing::debug!("Roster saved: {} course(s)", courses.len());
        Ok(())
    }
}

/// Parses roster text line by line, skipping lines that do not hold a
/// valid course. Blank lines are ignored.
pub fn parse_roster(text: &str) -> LoadReport<Course> {
    let mut courses = Vec::new();
    let mut skipped = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(course) => courses.push(course),
            Err(reason) => skipped.push(SkippedRecord {
                position: i + 1,
                reason,
            }),
        }
    }

    LoadReport::loaded(courses, skipped)
}

fn parse_line(line: &str) -> std::result::Result<Course, String> {
    let parts: Vec<&str> = line.split(',').collect();
    let [name, credit, marks] = parts.as_slice() else {
        return Err(format!("expected 3 fields, found {}: {}", parts.len(), line));
    };

    let (Ok(credit), Ok(marks)) = (credit.trim().parse::<i64>(), marks.trim().parse::<i64>()) else {
        return Err(format!("invalid credit or marks: {}", line));
    };

    Course::new(name, credit, marks).map_err(|e| format!("{}: {}", e.detail(), line))
}
