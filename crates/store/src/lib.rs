//! # StudyKit Store
//!
//! File-backed persistence for the student utility suite. Each sub-app has a
//! repository trait with a whole-document load and a whole-document save;
//! the file implementations overwrite their file on every save and reparse
//! it fully on every load.
//!
//! | store | file | format |
//! |-------|------|--------|
//! | roster | `gpa_data.txt` | `name,credit,marks` per line |
//! | bookings | `bookings.json` | JSON array of booking objects |
//! | timetable | `timetable.txt` | `YYYY-MM-DD \| HH:MM \| name` per line |
//! | reminders | `reminders.json` | JSON array of `{id, task, time}` |

pub mod models;
pub mod repositories;

pub mod mock;

use eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};

use repositories::{
    booking::BookingFile, reminder::ReminderFile, roster::RosterFile, timetable::TimetableFile,
};

pub const ROSTER_FILE: &str = "gpa_data.txt";
pub const BOOKINGS_FILE: &str = "bookings.json";
pub const TIMETABLE_FILE: &str = "timetable.txt";
pub const REMINDERS_FILE: &str = "reminders.json";

/// Directory holding every data file of the suite.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn roster(&self) -> RosterFile {
        RosterFile::new(self.root.join(ROSTER_FILE))
    }

    pub fn bookings(&self) -> BookingFile {
        BookingFile::new(self.root.join(BOOKINGS_FILE))
    }

    pub fn timetable(&self) -> TimetableFile {
        TimetableFile::new(self.root.join(TIMETABLE_FILE))
    }

    pub fn reminders(&self) -> ReminderFile {
        ReminderFile::new(self.root.join(REMINDERS_FILE))
    }
}

/// Opens the data directory, creating it when absent.
pub fn open_data_dir(path: impl Into<PathBuf>) -> Result<DataDir> {
    let root = path.into();
    std::fs::create_dir_all(&root)
        .wrap_err_with(|| format!("Cannot create data directory {}", root.display()))?;
    tracing::debug!("Using data directory {}", root.display());

    Ok(DataDir { root })
}

#[cfg(test)]
mod tests {
    use crate::mock::create_test_dir;

    #[test]
    fn data_dir_paths() {
        let (dir, data_dir) = create_test_dir();

        assert_eq!(data_dir.root(), dir.path());
        assert_eq!(data_dir.roster().path(), dir.path().join("gpa_data.txt"));
        assert_eq!(data_dir.bookings().path(), dir.path().join("bookings.json"));
        assert_eq!(data_dir.timetable().path(), dir.path().join("timetable.txt"));
        assert_eq!(data_dir.reminders().path(), dir.path().join("reminders.json"));
    }

    #[test]
    fn open_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        crate::open_data_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
