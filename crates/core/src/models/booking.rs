use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A confirmed discussion-room booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub venue: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub fn occupies(&self, venue: &str, date: NaiveDate, time_slot: &str) -> bool {
        self.venue == venue && self.date == date && self.time_slot == time_slot
    }
}

/// Raw form input for a booking, as typed or picked by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub venue: String,
    pub date: String,
    pub time_slot: String,
    pub name: String,
}

impl BookingRequest {
    pub fn new(venue: &str, date: &str, time_slot: &str, name: &str) -> Self {
        Self {
            venue: venue.to_string(),
            date: date.to_string(),
            time_slot: time_slot.to_string(),
            name: name.to_string(),
        }
    }
}

impl From<&Booking> for BookingRequest {
    fn from(booking: &Booking) -> Self {
        Self {
            venue: booking.venue.clone(),
            date: booking.date.format(crate::DATE_FORMAT).to_string(),
            time_slot: booking.time_slot.clone(),
            name: booking.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotStatus {
    Free,
    Booked { by: String },
}

impl SlotStatus {
    pub fn is_free(&self) -> bool {
        matches!(self, SlotStatus::Free)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub time_slot: String,
    pub status: SlotStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueAvailability {
    pub venue: String,
    pub slots: Vec<SlotAvailability>,
}

/// Venue × time-slot view for one date, derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityMatrix {
    pub date: NaiveDate,
    pub venues: Vec<VenueAvailability>,
}

impl AvailabilityMatrix {
    pub fn status(&self, venue: &str, time_slot: &str) -> Option<&SlotStatus> {
        self.venues
            .iter()
            .find(|v| v.venue == venue)?
            .slots
            .iter()
            .find(|s| s.time_slot == time_slot)
            .map(|s| &s.status)
    }

    pub fn booked(&self) -> impl Iterator<Item = (&str, &SlotAvailability)> {
        self.venues.iter().flat_map(|v| {
            v.slots
                .iter()
                .filter(|s| !s.status.is_free())
                .map(move |s| (v.venue.as_str(), s))
        })
    }

    pub fn free_count(&self) -> usize {
        self.venues
            .iter()
            .flat_map(|v| v.slots.iter())
            .filter(|s| s.status.is_free())
            .count()
    }
}
