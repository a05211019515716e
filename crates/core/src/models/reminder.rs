use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub task: String,
    pub due: NaiveDateTime,
}

impl Reminder {
    pub fn due_label(&self) -> String {
        self.due.format(crate::REMINDER_FORMAT).to_string()
    }
}
