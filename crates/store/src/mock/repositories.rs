use mockall::mock;
use studykit_core::models::{
    booking::Booking, course::Course, event::TimetableEvent, reminder::Reminder,
};

use crate::repositories::{BookingStore, LoadReport, ReminderStore, RosterStore, TimetableStore};

// Mock repositories for testing
mock! {
    pub RosterRepo {}

    impl RosterStore for RosterRepo {
        fn load_roster(&self) -> eyre::Result<LoadReport<Course>>;
        fn save_roster(&self, courses: &[Course]) -> eyre::Result<()>;
    }
}

mock! {
    pub BookingRepo {}

    impl BookingStore for BookingRepo {
        fn load_bookings(&self) -> eyre::Result<LoadReport<Booking>>;
        fn save_bookings(&self, bookings: &[Booking]) -> eyre::Result<()>;
    }
}

mock! {
    pub TimetableRepo {}

    impl TimetableStore for TimetableRepo {
        fn load_events(&self) -> eyre::Result<LoadReport<TimetableEvent>>;
        fn save_events(&self, events: &[TimetableEvent]) -> eyre::Result<()>;
    }
}

mock! {
    pub ReminderRepo {}

    impl ReminderStore for ReminderRepo {
        fn load_reminders(&self) -> eyre::Result<LoadReport<Reminder>>;
        fn save_reminders(&self, reminders: &[Reminder]) -> eyre::Result<()>;
    }
}
