//! # Room Booking Handler
//!
//! Drives the booking form. The same form fields serve both booking a new
//! room and editing an existing booking; which one a submit means is held
//! explicitly in [`FormMode`].
//!
//! Every successful book, edit and cancel rewrites the bookings document.

use chrono::NaiveDate;
use studykit_core::{
    errors::{StudyError, StudyResult},
    ledger::BookingLedger,
    models::booking::{AvailabilityMatrix, Booking, BookingRequest},
    parse_date,
};
use studykit_store::repositories::BookingStore;
use tracing::info;
use uuid::Uuid;

use super::{Clock, loaded_records, local_now, persisted};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(Uuid),
}

pub struct BookingHandler {
    ledger: BookingLedger,
    store: Box<dyn BookingStore>,
    mode: FormMode,
    clock: Clock,
    load_warning: Option<String>,
}

impl BookingHandler {
    /// Loads the ledger from `store`. A missing, unreadable or corrupted
    /// document yields an empty ledger; the reason is kept in
    /// [`BookingHandler::load_warning`].
    pub fn open(venues: Vec<String>, time_slots: Vec<String>, store: impl BookingStore + 'static) -> Self {
        let (bookings, warning) = loaded_records(store.load_bookings(), "bookings");
        info!("Booking ledger opened with {} booking(s)", bookings.len());

        Self {
            ledger: BookingLedger::with_bookings(venues, time_slots, bookings),
            store: Box::new(store),
            mode: FormMode::Creating,
            clock: local_now,
            load_warning: warning,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn book(&mut self, request: &BookingRequest) -> StudyResult<Booking> {
        let booking = self.ledger.book(request, (self.clock)())?.clone();
        info!(
            "Booked {} on {} at {} for {}",
            booking.venue, booking.date, booking.time_slot, booking.name
        );
        self.persist()?;
        Ok(booking)
    }

    pub fn edit(&mut self, id: Uuid, request: &BookingRequest) -> StudyResult<Booking> {
        let booking = self.ledger.edit(id, request, (self.clock)())?.clone();
        info!(
            "Updated booking {} to {} on {} at {}",
            id, booking.venue, booking.date, booking.time_slot
        );
        self.persist()?;
        Ok(booking)
    }

    /// Cancels booking `id`. Confirming intent is up to the caller.
    pub fn cancel(&mut self, id: Uuid) -> StudyResult<Booking> {
        let booking = self.ledger.cancel(id)?;
        info!("Cancelled booking {} ({})", id, booking.name);
        if self.mode == FormMode::Editing(id) {
            self.mode = FormMode::Creating;
        }
        self.persist()?;
        Ok(booking)
    }

    /// Switches the form to editing `id` and returns the values to prefill.
    pub fn begin_edit(&mut self, id: Uuid) -> StudyResult<BookingRequest> {
        let booking = self
            .ledger
            .get(id)
            .ok_or_else(|| StudyError::NotFound("Please select a booking to edit.".to_string()))?;
        let request = BookingRequest::from(booking);
        self.mode = FormMode::Editing(id);
        Ok(request)
    }

    pub fn reset(&mut self) {
        self.mode = FormMode::Creating;
    }

    /// Books or edits depending on the form mode. The form returns to
    /// creating once the change is applied, even if saving it failed.
    pub fn submit(&mut self, request: &BookingRequest) -> StudyResult<Booking> {
        let result = match self.mode {
            FormMode::Creating => self.book(request),
            FormMode::Editing(id) => self.edit(id, request),
        };
        if matches!(result, Ok(_) | Err(StudyError::StorageUnavailable(_))) {
            self.reset();
        }
        result
    }

    pub fn availability(&self, date: NaiveDate) -> AvailabilityMatrix {
        self.ledger.availability(date)
    }

    pub fn availability_on(&self, date: &str) -> StudyResult<AvailabilityMatrix> {
        Ok(self.ledger.availability(parse_date(date)?))
    }

    pub fn availability_today(&self) -> AvailabilityMatrix {
        self.ledger.availability((self.clock)().date())
    }

    fn persist(&self) -> StudyResult<()> {
        persisted(self.store.save_bookings(self.ledger.bookings()), "bookings")
    }
}
