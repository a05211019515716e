use chrono::NaiveDateTime;
use studykit_core::{errors::StudyResult, models::reminder::Reminder, reminders::ReminderList};
use studykit_store::repositories::ReminderStore;
use tracing::info;
use uuid::Uuid;

use super::{Clock, loaded_records, local_now, persisted};

/// Reminder list form actions, saved after every change.
pub struct ReminderHandler {
    list: ReminderList,
    store: Box<dyn ReminderStore>,
    clock: Clock,
    load_warning: Option<String>,
}

impl ReminderHandler {
    pub fn open(store: impl ReminderStore + 'static) -> Self {
        let (reminders, warning) = loaded_records(store.load_reminders(), "reminders");
        info!("Reminder list opened with {} reminder(s)", reminders.len());

        Self {
            list: ReminderList::with_reminders(reminders),
            store: Box::new(store),
            clock: local_now,
            load_warning: warning,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn list(&self) -> &ReminderList {
        &self.list
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Adds a reminder; `date` is `YYYY-MM-DD`, `hour` and `minute` come
    /// from the two time pickers.
    pub fn add_reminder(&mut self, task: &str, date: &str, hour: &str, minute: &str) -> StudyResult<Reminder> {
        let due = format!("{} {}:{}", date.trim(), hour.trim(), minute.trim());
        let reminder = self.list.add(task, &due, (self.clock)())?.clone();
        info!("Added reminder {} at {}", reminder.task, reminder.due_label());
        self.persist()?;
        Ok(reminder)
    }

    pub fn edit_reminder(
        &mut self,
        id: Uuid,
        task: &str,
        date: &str,
        hour: &str,
        minute: &str,
    ) -> StudyResult<Reminder> {
        let due = format!("{} {}:{}", date.trim(), hour.trim(), minute.trim());
        let reminder = self.list.edit(id, task, &due, (self.clock)())?.clone();
        info!("Updated reminder {} to {}", reminder.task, reminder.due_label());
        self.persist()?;
        Ok(reminder)
    }

    pub fn delete_reminder(&mut self, id: Uuid) -> StudyResult<Reminder> {
        let reminder = self.list.delete(id)?;
        info!("Deleted reminder {}", reminder.task);
        self.persist()?;
        Ok(reminder)
    }

    pub fn snooze(&mut self, id: Uuid, minutes: i64) -> StudyResult<Reminder> {
        let reminder = self.list.snooze(id, minutes)?.clone();
        info!("Snoozed reminder {} until {}", reminder.task, reminder.due_label());
        self.persist()?;
        Ok(reminder)
    }

    /// Reminders due this minute. Meant to be polled once a minute.
    pub fn check_due(&self) -> Vec<&Reminder> {
        self.due_at((self.clock)())
    }

    pub fn due_at(&self, now: NaiveDateTime) -> Vec<&Reminder> {
        self.list.due_at(now)
    }

    fn persist(&self) -> StudyResult<()> {
        persisted(self.store.save_reminders(self.list.reminders()), "reminders")
    }
}
