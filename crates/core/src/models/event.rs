use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timetable entry shown on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEvent {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub name: String,
}

impl TimetableEvent {
    pub fn time_label(&self) -> String {
        self.time.format(crate::EVENT_TIME_FORMAT).to_string()
    }
}
