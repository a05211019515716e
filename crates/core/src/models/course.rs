use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{StudyError, StudyResult};
use crate::grades;

/// Letter grade, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    pub const ALL: [Grade; 8] = [
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::F,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::F => "F",
        }
    }

    pub fn point(self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::AMinus => 3.75,
            Grade::BPlus => 3.5,
            Grade::B => 3.0,
            Grade::BMinus => 2.75,
            Grade::CPlus => 2.5,
            Grade::C => 2.0,
            Grade::F => 0.0,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single course on a student's roster.
///
/// Grade and grade point are derived from `marks` on every read, so they
/// can never disagree with it. Fields are private to keep the
/// `credit > 0` and `marks <= 100` invariants; edits replace the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    name: String,
    credit: u32,
    marks: u8,
}

impl Course {
    pub fn new(name: &str, credit: i64, marks: i64) -> StudyResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StudyError::InvalidInput(
                "Course name cannot be empty".to_string(),
            ));
        }
        if name.contains(['\n', '\r']) {
            return Err(StudyError::InvalidInput(
                "Course name must fit on one line".to_string(),
            ));
        }
        let credit = u32::try_from(credit)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| StudyError::InvalidInput("Credit hours must be positive".to_string()))?;
        let marks = u8::try_from(marks)
            .ok()
            .filter(|m| *m <= 100)
            .ok_or_else(|| StudyError::InvalidInput("Marks must be 0-100".to_string()))?;

        Ok(Self {
            name: name.to_string(),
            credit,
            marks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credit(&self) -> u32 {
        self.credit
    }

    pub fn marks(&self) -> u8 {
        self.marks
    }

    pub fn grade(&self) -> Grade {
        grades::grade_for(self.marks)
    }

    pub fn grade_point(&self) -> f64 {
        self.grade().point()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} credits) - Marks: {}, Grade: {}, GP: {:.4}",
            self.name,
            self.credit,
            self.marks,
            self.grade(),
            self.grade_point()
        )
    }
}

/// A student and their ordered course roster. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Student {
    pub name: String,
    courses: Vec<Course>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: Vec::new(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn add_course(&mut self, course: Course) -> usize {
        self.courses.push(course);
        self.courses.len() - 1
    }

    pub fn replace_course(&mut self, index: usize, course: Course) -> StudyResult<Course> {
        let slot = self
            .courses
            .get_mut(index)
            .ok_or_else(|| course_not_found(index))?;
        Ok(std::mem::replace(slot, course))
    }

    pub fn remove_course(&mut self, index: usize) -> StudyResult<Course> {
        if index >= self.courses.len() {
            return Err(course_not_found(index));
        }
        Ok(self.courses.remove(index))
    }

    /// Replaces the whole roster, e.g. after loading from disk.
    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
    }

    pub fn gpa(&self) -> f64 {
        grades::compute_gpa(&self.courses)
    }

    pub fn total_credits(&self) -> u64 {
        grades::total_credits(&self.courses)
    }
}

fn course_not_found(index: usize) -> StudyError {
    StudyError::NotFound(format!("No course at position {}", index + 1))
}
