use eyre::Result;
use std::path::{Path, PathBuf};
use studykit_core::models::booking::Booking;

use super::{BookingStore, LoadReport, parse_json_array, read_optional, write_json_pretty};
use crate::models::StoredBooking;

/// Bookings stored as one JSON array, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct BookingFile {
    path: PathBuf,
}

impl BookingFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookingStore for BookingFile {
    fn load_bookings(&self) -> Result<LoadReport<Booking>> {
        tracing::debug!("Loading bookings from {}", self.path.display());
        let Some(text) = read_optional(&self.path)? else {
            tracing::debug!("Bookings file not found: {}", self.path.display());
            return Ok(LoadReport::missing());
        };

        let report = parse_json_array::<StoredBooking, _, _>(&text, Booking::try_from);
        if let Some(reason) = &report.malformed {
            tracing::warn!("Bookings file {} is corrupted: {}", self.path.display(), reason);
        }
        for skipped in &report.skipped {
            tracing::warn!("Skipping booking #{}: {}", skipped.position, skipped.reason);
        }
        tracing::debug!("Bookings loaded: {}", report.records.len());
        Ok(report)
    }

    fn save_bookings(&self, bookings: &[Booking]) -> Result<()> {
        let stored: Vec<StoredBooking> = bookings.iter().map(StoredBooking::from).collect();
        write_json_pretty(&self.path, &stored)?;
        tracing::debug!("Bookings saved: {}", stored.len());
        Ok(())
    }
}
