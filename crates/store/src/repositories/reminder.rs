use eyre::Result;
use std::path::{Path, PathBuf};
use studykit_core::models::reminder::Reminder;

use super::{LoadReport, ReminderStore, parse_json_array, read_optional, write_json_pretty};
use crate::models::StoredReminder;

#[derive(Debug, Clone)]
pub struct ReminderFile {
    path: PathBuf,
}

impl ReminderFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReminderStore for ReminderFile {
    fn load_reminders(&self) -> Result<LoadReport<Reminder>> {
        let Some(text) = read_optional(&self.path)? else {
            return Ok(LoadReport::missing());
        };

        let report = parse_json_array::<StoredReminder, _, _>(&text, Reminder::try_from);
        if let Some(reason) = &report.malformed {
            tracing::warn!("Reminders file {} is corrupted: {}", self.path.display(), reason);
        }
        for skipped in &report.skipped {
            tracing::warn!("Skipping reminder #{}: {}", skipped.position, skipped.reason);
        }
        Ok(report)
    }

    fn save_reminders(&self, reminders: &[Reminder]) -> Result<()> {
        let stored: Vec<StoredReminder> = reminders.iter().map(StoredReminder::from).collect();
        write_json_pretty(&self.path, &stored)
    }
}
