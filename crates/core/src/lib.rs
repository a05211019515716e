//! # StudyKit Core
//!
//! Domain types and pure logic for the student utility suite: the grade
//! engine behind the GPA calculator, the discussion-room booking ledger,
//! the timetable event book and the reminder list.
//!
//! Nothing in this crate performs I/O. Persistence lives in
//! `studykit-store`; the handlers in `studykit-app` compose the two.

pub mod errors;
pub mod grades;
pub mod ledger;
pub mod models;
pub mod reminders;
pub mod timetable;

/// Calendar date format used for bookings and timetable events.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Booking creation timestamp format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reminder due-time format (minute precision).
pub const REMINDER_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Event time-of-day format.
pub const EVENT_TIME_FORMAT: &str = "%H:%M";

use chrono::NaiveDate;
use errors::{StudyError, StudyResult};

/// Parses a `YYYY-MM-DD` date typed into a form.
pub fn parse_date(text: &str) -> StudyResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| StudyError::InvalidInput("Please enter date in YYYY-MM-DD format.".to_string()))
}
