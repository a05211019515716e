use chrono::{NaiveDate, NaiveTime};
use eyre::{Result, WrapErr};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use studykit_core::{DATE_FORMAT, EVENT_TIME_FORMAT, models::event::TimetableEvent};
use uuid::Uuid;

use super::{LoadReport, SkippedRecord, TimetableStore, read_optional};

const SEPARATOR: &str = " | ";

/// Timetable events stored as `YYYY-MM-DD | HH:MM | name` lines. Ids are
/// not persisted; each load assigns fresh ones.
#[derive(Debug, Clone)]
pub struct TimetableFile {
    path: PathBuf,
}

impl TimetableFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TimetableStore for TimetableFile {
    fn load_events(&self) -> Result<LoadReport<TimetableEvent>> {
        let Some(text) = read_optional(&self.path)? else {
            return Ok(LoadReport::missing());
        };

        let report = parse_timetable(&text);
        for skipped in &report.skipped {
            tracing::warn!(
                "Skipping timetable line {}: {}",
                skipped.position,
                skipped.reason
            );
        }
        Ok(report)
    }

    fn save_events(&self, events: &[TimetableEvent]) -> Result<()> {
        let mut out = String::new();
        for event in events {
            let _ = writeln!(
                out,
                "{}{SEPARATOR}{}{SEPARATOR}{}",
                event.date.format(DATE_FORMAT),
                event.time.format(EVENT_TIME_FORMAT),
                event.name
            );
        }
        std::fs::write(&self.path, out)
            .wrap_err_with(|| format!("Unable to save timetable to {}", self.path.display()))
    }
}

pub fn parse_timetable(text: &str) -> LoadReport<TimetableEvent> {
    let mut events = Vec::new();
    let mut skipped = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line.trim()) {
            Ok(event) => events.push(event),
            Err(reason) => skipped.push(SkippedRecord {
                position: i + 1,
                reason,
            }),
        }
    }

    LoadReport::loaded(events, skipped)
}

fn parse_line(line: &str) -> std::result::Result<TimetableEvent, String> {
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    let [date, time, name] = parts.as_slice() else {
        return Err(format!("expected 3 fields, found {}: {}", parts.len(), line));
    };

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| format!("invalid date: {}", line))?;
    let time = NaiveTime::parse_from_str(time, EVENT_TIME_FORMAT)
        .map_err(|_| format!("invalid time: {}", line))?;
    if name.trim().is_empty() {
        return Err(format!("missing event name: {}", line));
    }

    Ok(TimetableEvent {
        id: Uuid::new_v4(),
        date,
        time,
        name: name.trim().to_string(),
    })
}
