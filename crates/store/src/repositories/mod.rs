pub mod booking;
pub mod reminder;
pub mod roster;
pub mod timetable;

use eyre::{Result, WrapErr};
use serde::{Serialize, de::DeserializeOwned};
use std::io::ErrorKind;
use std::path::Path;
use studykit_core::models::{
    booking::Booking, course::Course, event::TimetableEvent, reminder::Reminder,
};

/// A record that could not be read back and was left out of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number, or 1-based position in a JSON array.
    pub position: usize,
    pub reason: String,
}

/// Outcome of reading a whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
    /// The file did not exist.
    pub missing: bool,
    /// The document as a whole could not be parsed.
    pub malformed: Option<String>,
}

impl<T> LoadReport<T> {
    pub fn missing() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            missing: true,
            malformed: None,
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            missing: false,
            malformed: Some(reason.into()),
        }
    }

    pub fn loaded(records: Vec<T>, skipped: Vec<SkippedRecord>) -> Self {
        Self {
            records,
            skipped,
            missing: false,
            malformed: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A one-line summary of anything that went wrong, if anything did.
    pub fn warning(&self) -> Option<String> {
        if let Some(reason) = &self.malformed {
            return Some(format!("Could not parse data file, starting empty: {}", reason));
        }
        if !self.skipped.is_empty() {
            return Some(format!("Skipped {} invalid record(s)", self.skipped.len()));
        }
        None
    }
}

pub trait RosterStore {
    fn load_roster(&self) -> Result<LoadReport<Course>>;
    fn save_roster(&self, courses: &[Course]) -> Result<()>;
}

pub trait BookingStore {
    fn load_bookings(&self) -> Result<LoadReport<Booking>>;
    fn save_bookings(&self, bookings: &[Booking]) -> Result<()>;
}

pub trait TimetableStore {
    fn load_events(&self) -> Result<LoadReport<TimetableEvent>>;
    fn save_events(&self, events: &[TimetableEvent]) -> Result<()>;
}

pub trait ReminderStore {
    fn load_reminders(&self) -> Result<LoadReport<Reminder>>;
    fn save_reminders(&self, reminders: &[Reminder]) -> Result<()>;
}

/// Reads a text file, returning `None` when it does not exist.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).wrap_err_with(|| format!("Unable to read {}", path.display())),
    }
}

/// Parses a JSON array record by record. A document that is not an array
/// yields a malformed report; elements that fail `convert` are skipped.
pub(crate) fn parse_json_array<S, T, F>(text: &str, convert: F) -> LoadReport<T>
where
    S: DeserializeOwned,
    F: Fn(S) -> std::result::Result<T, String>,
{
    let values: Vec<serde_json::Value> = match serde_json::from_str(text) {
        Ok(values) => values,
        Err(e) => return LoadReport::malformed(e.to_string()),
    };

    let mut records = Vec::with_capacity(values.len());
    let mut skipped = Vec::new();
    for (i, value) in values.into_iter().enumerate() {
        let record = serde_json::from_value::<S>(value)
            .map_err(|e| e.to_string())
            .and_then(&convert);
        match record {
            Ok(record) => records.push(record),
            Err(reason) => skipped.push(SkippedRecord {
                position: i + 1,
                reason,
            }),
        }
    }

    LoadReport::loaded(records, skipped)
}

/// Overwrites `path` with `value` as JSON indented by four spaces.
pub(crate) fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .wrap_err("Unable to encode JSON document")?;
    buf.push(b'\n');

    std::fs::write(path, buf).wrap_err_with(|| format!("Unable to write {}", path.display()))
}
