//! One handler per sub-app. Each owns its engine and its store, applies a
//! form action to the engine and persists the result.
//!
//! A mutation whose save fails stays applied in memory and returns
//! `StudyError::StorageUnavailable`; the in-memory state is authoritative
//! for the rest of the session.

pub mod booking;
pub mod gpa;
pub mod reminder;
pub mod timetable;

use chrono::{Local, NaiveDateTime};
use studykit_core::errors::{StudyError, StudyResult};

/// Source of the current local time.
pub type Clock = fn() -> NaiveDateTime;

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Turns a store failure into `StorageUnavailable`, logging it.
pub(crate) fn persisted(result: eyre::Result<()>, what: &str) -> StudyResult<()> {
    result.map_err(|e| {
        tracing::warn!("Could not save {}: {:#}", what, e);
        StudyError::StorageUnavailable(e)
    })
}

/// Logs a load problem and returns the message to surface, if any.
pub(crate) fn loaded_records<T>(
    result: eyre::Result<studykit_store::repositories::LoadReport<T>>,
    what: &str,
) -> (Vec<T>, Option<String>) {
    match result {
        Ok(report) => {
            let warning = report.warning();
            if let Some(w) = &warning {
                tracing::warn!("{}: {}", what, w);
            }
            (report.records, warning)
        }
        Err(e) => {
            tracing::warn!("Could not load {}: {:#}", what, e);
            (Vec::new(), Some(format!("Could not load {}: {}", what, e)))
        }
    }
}
