//! # Booking Ledger
//!
//! In-memory list of discussion-room bookings. The ledger enforces that no
//! two bookings share a `(venue, date, time_slot)` key, both when booking and
//! when editing, and derives the availability matrix for a date.
//!
//! Records are identified by a stable `Uuid`, never by position. Callers that
//! only know a display position can turn it into an id with
//! [`BookingLedger::resolve`] immediately before mutating.
//!
//! Every check is a linear scan over the current records; the ledger is sized
//! for a single room roster.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use uuid::Uuid;

use crate::errors::{StudyError, StudyResult};
use crate::models::booking::{
    AvailabilityMatrix, Booking, BookingRequest, SlotAvailability, SlotStatus, VenueAvailability,
};

/// A booking request that passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub venue: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    venues: Vec<String>,
    time_slots: Vec<String>,
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new(venues: Vec<String>, time_slots: Vec<String>) -> Self {
        Self {
            venues,
            time_slots,
            bookings: Vec::new(),
        }
    }

    /// Builds a ledger over previously persisted records, kept in their order.
    pub fn with_bookings(venues: Vec<String>, time_slots: Vec<String>, bookings: Vec<Booking>) -> Self {
        Self {
            venues,
            time_slots,
            bookings,
        }
    }

    pub fn venues(&self) -> &[String] {
        &self.venues
    }

    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Resolves a display position to the id of the record currently there.
    pub fn resolve(&self, index: usize) -> StudyResult<Uuid> {
        self.bookings
            .get(index)
            .map(|b| b.id)
            .ok_or_else(|| StudyError::NotFound(format!("No booking at position {}", index + 1)))
    }

    /// Checks that every field is filled, the venue and slot are configured
    /// ones, and the date is `YYYY-MM-DD` and not before `today`.
    ///
    /// # Errors
    ///
    /// * `StudyError::InvalidInput` - with a message naming the failed check
    pub fn validate(&self, request: &BookingRequest, today: NaiveDate) -> StudyResult<ValidatedRequest> {
        let venue = request.venue.trim();
        let date = request.date.trim();
        let time_slot = request.time_slot.trim();
        let name = request.name.trim();

        if venue.is_empty() || date.is_empty() || time_slot.is_empty() || name.is_empty() {
            return Err(StudyError::InvalidInput(
                "All fields must be filled.".to_string(),
            ));
        }

        let date = NaiveDate::parse_from_str(date, crate::DATE_FORMAT).map_err(|_| {
            StudyError::InvalidInput("Please enter date in YYYY-MM-DD format.".to_string())
        })?;
        if date < today {
            return Err(StudyError::InvalidInput(
                "Booking date cannot be in the past.".to_string(),
            ));
        }

        if !self.venues.iter().any(|v| v == venue) {
            return Err(StudyError::InvalidInput(format!("Unknown venue: {}", venue)));
        }
        if !self.time_slots.iter().any(|s| s == time_slot) {
            return Err(StudyError::InvalidInput(format!(
                "Unknown time slot: {}",
                time_slot
            )));
        }

        Ok(ValidatedRequest {
            venue: venue.to_string(),
            date,
            time_slot: time_slot.to_string(),
            name: name.to_string(),
        })
    }

    /// Appends a new booking stamped with `now`.
    ///
    /// # Errors
    ///
    /// * `StudyError::InvalidInput` - see [`BookingLedger::validate`]
    /// * `StudyError::Conflict` - the venue is already booked for that date and slot
    pub fn book(&mut self, request: &BookingRequest, now: NaiveDateTime) -> StudyResult<&Booking> {
        let valid = self.validate(request, now.date())?;
        if self.find_conflict(&valid, None).is_some() {
            return Err(StudyError::Conflict(format!(
                "The room {} is already booked for {} at {}.",
                valid.venue,
                valid.date.format(crate::DATE_FORMAT),
                valid.time_slot
            )));
        }

        self.bookings.push(Booking {
            id: Uuid::new_v4(),
            venue: valid.venue,
            date: valid.date,
            time_slot: valid.time_slot,
            name: valid.name,
            created_at: truncate_to_seconds(now),
        });
        let index = self.bookings.len() - 1;
        Ok(&self.bookings[index])
    }

    /// Replaces every field of booking `id` in place and refreshes its
    /// timestamp. The record's own key is ignored by the conflict scan, so
    /// saving unchanged values succeeds.
    ///
    /// # Errors
    ///
    /// * `StudyError::NotFound` - no booking with that id
    /// * `StudyError::InvalidInput` - see [`BookingLedger::validate`]
    /// * `StudyError::Conflict` - another booking holds the new key
    pub fn edit(&mut self, id: Uuid, request: &BookingRequest, now: NaiveDateTime) -> StudyResult<&Booking> {
        let index = self.index_of(id)?;
        let valid = self.validate(request, now.date())?;
        if self.find_conflict(&valid, Some(id)).is_some() {
            return Err(StudyError::Conflict(format!(
                "The room {} is already booked for {} at {} by another booking.",
                valid.venue,
                valid.date.format(crate::DATE_FORMAT),
                valid.time_slot
            )));
        }

        let booking = &mut self.bookings[index];
        booking.venue = valid.venue;
        booking.date = valid.date;
        booking.time_slot = valid.time_slot;
        booking.name = valid.name;
        booking.created_at = truncate_to_seconds(now);
        Ok(&self.bookings[index])
    }

    /// Removes booking `id` and returns it.
    pub fn cancel(&mut self, id: Uuid) -> StudyResult<Booking> {
        let index = self.index_of(id)?;
        Ok(self.bookings.remove(index))
    }

    /// Availability of every configured venue and slot on `date`.
    pub fn availability(&self, date: NaiveDate) -> AvailabilityMatrix {
        self.availability_for(&self.venues, date)
    }

    pub fn availability_for(&self, venues: &[String], date: NaiveDate) -> AvailabilityMatrix {
        let venues = venues
            .iter()
            .map(|venue| VenueAvailability {
                venue: venue.clone(),
                slots: self
                    .time_slots
                    .iter()
                    .map(|slot| SlotAvailability {
                        time_slot: slot.clone(),
                        status: match self.bookings.iter().find(|b| b.occupies(venue, date, slot)) {
                            Some(b) => SlotStatus::Booked { by: b.name.clone() },
                            None => SlotStatus::Free,
                        },
                    })
                    .collect(),
            })
            .collect();

        AvailabilityMatrix { date, venues }
    }

    fn index_of(&self, id: Uuid) -> StudyResult<usize> {
        self.bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StudyError::NotFound(format!("Booking {} not found", id)))
    }

    fn find_conflict(&self, valid: &ValidatedRequest, exclude: Option<Uuid>) -> Option<&Booking> {
        self.bookings.iter().find(|b| {
            Some(b.id) != exclude && b.occupies(&valid.venue, valid.date, &valid.time_slot)
        })
    }
}

fn truncate_to_seconds(now: NaiveDateTime) -> NaiveDateTime {
    now.with_nanosecond(0).unwrap_or(now)
}
