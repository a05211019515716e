//! # GPA Calculator Handler
//!
//! Course roster form actions. The roster is only written when the user
//! asks to save, and a load replaces it only when the file held at least
//! one valid course.

use serde::Serialize;
use std::collections::BTreeMap;
use studykit_core::{
    errors::{StudyError, StudyResult},
    grades,
    models::course::{Course, Grade, Student},
};
use studykit_store::repositories::RosterStore;
use tracing::info;

use super::persisted;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaSummary {
    pub student: String,
    pub gpa: f64,
    pub total_credits: u64,
    pub course_count: usize,
    pub distribution: BTreeMap<Grade, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSummary {
    /// No saved roster exists.
    Missing,
    /// The file held no valid course; the current roster was kept.
    Empty { skipped: usize },
    Loaded { count: usize, skipped: usize },
}

pub struct GpaHandler {
    student: Student,
    store: Box<dyn RosterStore>,
}

impl GpaHandler {
    pub fn new(student_name: &str, store: impl RosterStore + 'static) -> Self {
        Self {
            student: Student::new(student_name),
            store: Box::new(store),
        }
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Adds a course from raw form text and returns its position.
    pub fn add_course(&mut self, name: &str, credit: &str, marks: &str) -> StudyResult<usize> {
        let course = parse_course_form(name, credit, marks)?;
        info!("Added course {}", course);
        Ok(self.student.add_course(course))
    }

    /// Replaces the course at `index` wholesale.
    pub fn edit_course(&mut self, index: usize, name: &str, credit: &str, marks: &str) -> StudyResult<()> {
        if index >= self.student.courses().len() {
            return Err(StudyError::NotFound("Select a course first".to_string()));
        }
        let course = parse_course_form(name, credit, marks)?;
        info!("Updated course {} to {}", index + 1, course);
        self.student.replace_course(index, course)?;
        Ok(())
    }

    pub fn delete_course(&mut self, index: usize) -> StudyResult<Course> {
        if index >= self.student.courses().len() {
            return Err(StudyError::NotFound("Select a course first".to_string()));
        }
        let removed = self.student.remove_course(index)?;
        info!("Removed course {}", removed.name());
        Ok(removed)
    }

    pub fn summary(&self) -> GpaSummary {
        let courses = self.student.courses();
        GpaSummary {
            student: self.student.name.clone(),
            gpa: grades::compute_gpa(courses),
            total_credits: grades::total_credits(courses),
            course_count: courses.len(),
            distribution: grades::grade_distribution(courses),
        }
    }

    pub fn save(&self) -> StudyResult<()> {
        let courses = self.student.courses();
        if courses.is_empty() {
            return Err(StudyError::InvalidInput(
                "There are no courses to save!".to_string(),
            ));
        }
        persisted(self.store.save_roster(courses), "roster")?;
        info!("Saved {} course(s)", courses.len());
        Ok(())
    }

    pub fn load(&mut self) -> StudyResult<LoadSummary> {
        let report = self.store.load_roster().map_err(|e| {
            tracing::warn!("Could not load roster: {:#}", e);
            StudyError::StorageUnavailable(e)
        })?;

        if report.missing {
            return Ok(LoadSummary::Missing);
        }
        let skipped = report.skipped.len();
        if report.records.is_empty() {
            tracing::warn!("Roster file held no valid course ({} skipped)", skipped);
            return Ok(LoadSummary::Empty { skipped });
        }

        let count = report.records.len();
        self.student.set_courses(report.records);
        info!("Loaded {} course(s), skipped {}", count, skipped);
        Ok(LoadSummary::Loaded { count, skipped })
    }
}

/// Validates the three course form fields in the order they appear.
pub fn parse_course_form(name: &str, credit: &str, marks: &str) -> StudyResult<Course> {
    if name.trim().is_empty() {
        return Err(StudyError::InvalidInput(
            "Course name cannot be empty".to_string(),
        ));
    }
    let credit: i64 = credit
        .trim()
        .parse()
        .map_err(|_| StudyError::InvalidInput("Credit hours must be positive".to_string()))?;
    let marks: i64 = marks
        .trim()
        .parse()
        .map_err(|_| StudyError::InvalidInput("Marks must be 0-100".to_string()))?;

    Course::new(name, credit, marks)
}
