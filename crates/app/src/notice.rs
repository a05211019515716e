//! # User Notices
//!
//! Maps domain errors to the message a form would show: a severity, a
//! dialog title and a body. This is the one place that decides how each
//! error category is presented.

use serde::Serialize;
use std::fmt;
use studykit_core::errors::StudyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

impl From<&StudyError> for Notice {
    fn from(err: &StudyError) -> Self {
        let (severity, title) = match err {
            StudyError::InvalidInput(_) => (Severity::Warning, "Input Error"),
            StudyError::Conflict(_) => (Severity::Error, "Booking Conflict"),
            StudyError::NotFound(_) => (Severity::Warning, "No Selection"),
            StudyError::StorageUnavailable(_) => (Severity::Error, "Storage Error"),
        };

        Self {
            severity,
            title: title.to_string(),
            message: err.detail(),
        }
    }
}

impl From<StudyError> for Notice {
    fn from(err: StudyError) -> Self {
        Notice::from(&err)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
