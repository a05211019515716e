//! Timetable events keyed by calendar date.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::errors::{StudyError, StudyResult};
use crate::models::event::TimetableEvent;

#[derive(Debug, Clone, Default)]
pub struct EventBook {
    events: Vec<TimetableEvent>,
}

impl EventBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<TimetableEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[TimetableEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&TimetableEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn add(&mut self, date: NaiveDate, time: &str, name: &str) -> StudyResult<&TimetableEvent> {
        let (time, name) = validate_entry(time, name)?;
        self.events.push(TimetableEvent {
            id: Uuid::new_v4(),
            date,
            time,
            name,
        });
        let index = self.events.len() - 1;
        Ok(&self.events[index])
    }

    /// Changes the time and name of an event; its date stays fixed.
    pub fn edit(&mut self, id: Uuid, time: &str, name: &str) -> StudyResult<&TimetableEvent> {
        let index = self.index_of(id)?;
        let (time, name) = validate_entry(time, name)?;
        let event = &mut self.events[index];
        event.time = time;
        event.name = name;
        Ok(&self.events[index])
    }

    pub fn delete(&mut self, id: Uuid) -> StudyResult<TimetableEvent> {
        let index = self.index_of(id)?;
        Ok(self.events.remove(index))
    }

    /// Events on `date` ordered by time; ties keep insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&TimetableEvent> {
        let mut day: Vec<&TimetableEvent> = self.events.iter().filter(|e| e.date == date).collect();
        day.sort_by_key(|e| e.time);
        day
    }

    /// Days of the given month that have at least one event.
    pub fn dates_with_events(&self, year: i32, month: u32) -> BTreeSet<NaiveDate> {
        self.events
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .map(|e| e.date)
            .collect()
    }

    fn index_of(&self, id: Uuid) -> StudyResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StudyError::NotFound(format!("Event {} not found", id)))
    }
}

fn validate_entry(time: &str, name: &str) -> StudyResult<(NaiveTime, String)> {
    let time = time.trim();
    let name = name.trim();
    if time.is_empty() || name.is_empty() {
        return Err(StudyError::InvalidInput(
            "Please enter both time and event name.".to_string(),
        ));
    }
    // '|' separates fields in the timetable file
    if name.contains('|') {
        return Err(StudyError::InvalidInput(
            "Event name cannot contain '|'.".to_string(),
        ));
    }
    let time = NaiveTime::parse_from_str(time, crate::EVENT_TIME_FORMAT)
        .map_err(|_| StudyError::InvalidInput("Please enter time as HH:MM.".to_string()))?;
    Ok((time, name.to_string()))
}
