//! On-disk record shapes and their conversion to core models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use studykit_core::{
    DATE_FORMAT, REMINDER_FORMAT, TIMESTAMP_FORMAT,
    models::{booking::Booking, reminder::Reminder},
};
use uuid::Uuid;

/// One object of the bookings document. Documents written before records
/// carried ids load with a fresh id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBooking {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub venue: String,
    pub date: String,
    pub time_slot: String,
    pub name: String,
    pub timestamp: String,
}

impl From<&Booking> for StoredBooking {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            venue: booking.venue.clone(),
            date: booking.date.format(DATE_FORMAT).to_string(),
            time_slot: booking.time_slot.clone(),
            name: booking.name.clone(),
            timestamp: booking.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl TryFrom<StoredBooking> for Booking {
    type Error = String;

    fn try_from(stored: StoredBooking) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&stored.date, DATE_FORMAT)
            .map_err(|e| format!("invalid date {:?}: {}", stored.date, e))?;
        let created_at = NaiveDateTime::parse_from_str(&stored.timestamp, TIMESTAMP_FORMAT)
            .map_err(|e| format!("invalid timestamp {:?}: {}", stored.timestamp, e))?;

        Ok(Booking {
            id: stored.id,
            venue: stored.venue,
            date,
            time_slot: stored.time_slot,
            name: stored.name,
            created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReminder {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub task: String,
    pub time: String,
}

impl From<&Reminder> for StoredReminder {
    fn from(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id,
            task: reminder.task.clone(),
            time: reminder.due.format(REMINDER_FORMAT).to_string(),
        }
    }
}

impl TryFrom<StoredReminder> for Reminder {
    type Error = String;

    fn try_from(stored: StoredReminder) -> Result<Self, Self::Error> {
        let due = NaiveDateTime::parse_from_str(&stored.time, REMINDER_FORMAT)
            .map_err(|e| format!("invalid time {:?}: {}", stored.time, e))?;

        Ok(Reminder {
            id: stored.id,
            task: stored.task,
            due,
        })
    }
}
