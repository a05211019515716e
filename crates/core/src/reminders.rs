//! Reminder list: tasks due at a minute-precision local time.
//!
//! Only the data side lives here. Waking up once a minute to call
//! [`ReminderList::due_at`] is the caller's job.

use chrono::{Duration, NaiveDateTime, Timelike};
use uuid::Uuid;

use crate::errors::{StudyError, StudyResult};
use crate::models::reminder::Reminder;

#[derive(Debug, Clone, Default)]
pub struct ReminderList {
    reminders: Vec<Reminder>,
}

impl ReminderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self { reminders }
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    pub fn add(&mut self, task: &str, due: &str, now: NaiveDateTime) -> StudyResult<&Reminder> {
        let (task, due) = validate_reminder(task, due, now)?;
        self.reminders.push(Reminder {
            id: Uuid::new_v4(),
            task,
            due,
        });
        let index = self.reminders.len() - 1;
        Ok(&self.reminders[index])
    }

    pub fn edit(&mut self, id: Uuid, task: &str, due: &str, now: NaiveDateTime) -> StudyResult<&Reminder> {
        let index = self.index_of(id)?;
        let (task, due) = validate_reminder(task, due, now)?;
        let reminder = &mut self.reminders[index];
        reminder.task = task;
        reminder.due = due;
        Ok(&self.reminders[index])
    }

    pub fn delete(&mut self, id: Uuid) -> StudyResult<Reminder> {
        let index = self.index_of(id)?;
        Ok(self.reminders.remove(index))
    }

    /// Pushes a reminder's due time forward by `minutes`.
    pub fn snooze(&mut self, id: Uuid, minutes: i64) -> StudyResult<&Reminder> {
        if minutes < 1 {
            return Err(StudyError::InvalidInput(
                "Snooze minutes must be at least 1.".to_string(),
            ));
        }
        let index = self.index_of(id)?;
        let due = Duration::try_minutes(minutes)
            .and_then(|delay| self.reminders[index].due.checked_add_signed(delay))
            .ok_or_else(|| StudyError::InvalidInput("Snooze time is out of range.".to_string()))?;
        self.reminders[index].due = due;
        Ok(&self.reminders[index])
    }

    /// Reminders due in the same minute as `now`.
    pub fn due_at(&self, now: NaiveDateTime) -> Vec<&Reminder> {
        let minute = truncate_to_minute(now);
        self.reminders.iter().filter(|r| r.due == minute).collect()
    }

    fn index_of(&self, id: Uuid) -> StudyResult<usize> {
        self.reminders
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StudyError::NotFound(format!("Reminder {} not found", id)))
    }
}

fn validate_reminder(task: &str, due: &str, now: NaiveDateTime) -> StudyResult<(String, NaiveDateTime)> {
    let task = task.trim();
    let invalid =
        || StudyError::InvalidInput("Please enter a valid task and a future date/time.".to_string());
    if task.is_empty() {
        return Err(invalid());
    }
    let due = NaiveDateTime::parse_from_str(due.trim(), crate::REMINDER_FORMAT).map_err(|_| invalid())?;
    if due < truncate_to_minute(now) {
        return Err(invalid());
    }
    Ok((task.to_string(), due))
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}
