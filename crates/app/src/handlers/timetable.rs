use chrono::NaiveDate;
use std::collections::BTreeSet;
use studykit_core::{
    errors::StudyResult, models::event::TimetableEvent, parse_date, timetable::EventBook,
};
use studykit_store::repositories::TimetableStore;
use tracing::info;
use uuid::Uuid;

use super::{loaded_records, persisted};

/// Calendar timetable: events per day, saved after every change.
pub struct TimetableHandler {
    book: EventBook,
    store: Box<dyn TimetableStore>,
    load_warning: Option<String>,
}

impl TimetableHandler {
    pub fn open(store: impl TimetableStore + 'static) -> Self {
        let (events, warning) = loaded_records(store.load_events(), "timetable");
        info!("Timetable opened with {} event(s)", events.len());

        Self {
            book: EventBook::with_events(events),
            store: Box::new(store),
            load_warning: warning,
        }
    }

    pub fn book(&self) -> &EventBook {
        &self.book
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn add_event(&mut self, date: &str, time: &str, name: &str) -> StudyResult<TimetableEvent> {
        let date = parse_date(date)?;
        let event = self.book.add(date, time, name)?.clone();
        info!("Added event {} on {} at {}", event.name, event.date, event.time_label());
        self.persist()?;
        Ok(event)
    }

    pub fn edit_event(&mut self, id: Uuid, time: &str, name: &str) -> StudyResult<TimetableEvent> {
        let event = self.book.edit(id, time, name)?.clone();
        info!("Updated event {} on {}", event.name, event.date);
        self.persist()?;
        Ok(event)
    }

    pub fn delete_event(&mut self, id: Uuid) -> StudyResult<TimetableEvent> {
        let event = self.book.delete(id)?;
        info!("Deleted event {} on {}", event.name, event.date);
        self.persist()?;
        Ok(event)
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&TimetableEvent> {
        self.book.events_on(date)
    }

    /// Days of `year`/`month` with at least one event, for calendar marks.
    pub fn busy_days(&self, year: i32, month: u32) -> BTreeSet<NaiveDate> {
        self.book.dates_with_events(year, month)
    }

    fn persist(&self) -> StudyResult<()> {
        persisted(self.store.save_events(self.book.events()), "timetable")
    }
}
