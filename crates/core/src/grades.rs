//! # Grade Engine
//!
//! Maps numeric marks onto the fixed letter-grade table and aggregates
//! credit-weighted grade points into a GPA.
//!
//! | marks  | grade | point  |
//! |--------|-------|--------|
//! | 80–100 | A     | 4.0000 |
//! | 75–79  | A-    | 3.7500 |
//! | 70–74  | B+    | 3.5000 |
//! | 65–69  | B     | 3.0000 |
//! | 60–64  | B-    | 2.7500 |
//! | 55–59  | C+    | 2.5000 |
//! | 50–54  | C     | 2.0000 |
//! | 0–49   | F     | 0.0000 |
//!
//! Everything here is recomputed from the course sequence on every call.

use std::collections::BTreeMap;

use crate::errors::{StudyError, StudyResult};
use crate::models::course::{Course, Grade};

/// Inclusive mark ranges, highest first. Disjoint and exhaustive over 0..=100.
pub const GRADE_TABLE: [(u8, u8, Grade); 8] = [
    (80, 100, Grade::A),
    (75, 79, Grade::AMinus),
    (70, 74, Grade::BPlus),
    (65, 69, Grade::B),
    (60, 64, Grade::BMinus),
    (55, 59, Grade::CPlus),
    (50, 54, Grade::C),
    (0, 49, Grade::F),
];

/// Converts marks to `(grade, grade_point)`.
///
/// # Errors
///
/// * `StudyError::InvalidInput` - marks outside `0..=100`
pub fn convert(marks: i64) -> StudyResult<(Grade, f64)> {
    GRADE_TABLE
        .iter()
        .find(|(lo, hi, _)| (i64::from(*lo)..=i64::from(*hi)).contains(&marks))
        .map(|(_, _, grade)| (*grade, grade.point()))
        .ok_or_else(|| StudyError::InvalidInput(format!("Marks must be 0-100, got {}", marks)))
}

// Callers hold a validated `Course`, so marks are already within 0..=100.
pub(crate) fn grade_for(marks: u8) -> Grade {
    convert(i64::from(marks))
        .map(|(grade, _)| grade)
        .unwrap_or(Grade::F)
}

/// Rounds to four decimal places, the precision grade points are shown at.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Credit-weighted mean of `(credit, grade_point)` pairs, rounded to four
/// decimals. Zero total credit yields `0.0`.
pub fn weighted_gpa<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (u32, f64)>,
{
    let mut total_points = 0.0;
    let mut total_credits: u64 = 0;
    for (credit, point) in pairs {
        total_points += point * f64::from(credit);
        total_credits += u64::from(credit);
    }

    if total_credits == 0 {
        return 0.0;
    }
    round4(total_points / total_credits as f64)
}

pub fn compute_gpa(courses: &[Course]) -> f64 {
    weighted_gpa(courses.iter().map(|c| (c.credit(), c.grade_point())))
}

pub fn total_credits(courses: &[Course]) -> u64 {
    courses.iter().map(|c| u64::from(c.credit())).sum()
}

/// Number of courses per grade. Every grade is present, zero when unused.
pub fn grade_distribution(courses: &[Course]) -> BTreeMap<Grade, usize> {
    let mut counts: BTreeMap<Grade, usize> = Grade::ALL.iter().map(|g| (*g, 0)).collect();
    for course in courses {
        *counts.entry(course.grade()).or_insert(0) += 1;
    }
    counts
}
