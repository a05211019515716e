//! # StudyKit App
//!
//! Application layer of the student utility suite: configuration, the form
//! handlers of the four sub-apps and the notices shown for their errors.
//!
//! - **GPA calculator**: course roster, grade conversion, weighted GPA
//! - **Room booking**: venue/date/slot ledger with conflict detection
//! - **Timetable**: calendar of dated events
//! - **Reminders**: tasks due at a given minute
//!
//! Handlers own a store trait object, so tests swap in the mocks from
//! `studykit_store::mock`.

/// Environment configuration
pub mod config;
/// Per sub-app form handlers
pub mod handlers;
/// Error presentation
pub mod notice;

use eyre::Result;
use studykit_store::open_data_dir;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use config::AppConfig;
use handlers::{
    booking::BookingHandler,
    gpa::{GpaHandler, LoadSummary},
    reminder::ReminderHandler,
    timetable::TimetableHandler,
};
use notice::Notice;

/// Installs the global log subscriber.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// The four sub-apps, opened on one data directory.
pub struct StudentSuite {
    pub gpa: GpaHandler,
    pub bookings: BookingHandler,
    pub timetable: TimetableHandler,
    pub reminders: ReminderHandler,
}

impl StudentSuite {
    /// Warnings raised while opening, for display at startup.
    pub fn startup_notices(&self) -> Vec<Notice> {
        [
            ("Bookings", self.bookings.load_warning()),
            ("Timetable", self.timetable.load_warning()),
            ("Reminders", self.reminders.load_warning()),
        ]
        .into_iter()
        .filter_map(|(title, warning)| warning.map(|w| Notice::warning(title, w)))
        .collect()
    }
}

/// Opens every sub-app on `config.data_dir` and loads the saved roster.
///
/// Only a data directory that cannot be created is fatal. Unreadable data
/// files leave their sub-app empty and show up in
/// [`StudentSuite::startup_notices`].
pub fn open_suite(config: &AppConfig) -> Result<StudentSuite> {
    let data_dir = open_data_dir(&config.data_dir)?;
    info!("Opening StudyKit in {}", data_dir.root().display());

    let mut gpa = GpaHandler::new(&config.student_name, data_dir.roster());
    match gpa.load() {
        Ok(LoadSummary::Loaded { count, .. }) => info!("Restored {} course(s)", count),
        Ok(_) => {}
        Err(e) => tracing::warn!("{}", Notice::from(&e)),
    }

    Ok(StudentSuite {
        gpa,
        bookings: BookingHandler::open(
            config.venues.clone(),
            config.time_slots.clone(),
            data_dir.bookings(),
        ),
        timetable: TimetableHandler::open(data_dir.timetable()),
        reminders: ReminderHandler::open(data_dir.reminders()),
    })
}
