//! # Application Configuration
//!
//! Loads the settings shared by every sub-app from environment variables,
//! with defaults for everything.
//!
//! ## Environment Variables
//!
//! - `STUDYKIT_DATA_DIR`: Directory holding the data files (default: "data")
//! - `STUDYKIT_STUDENT_NAME`: Name shown on the GPA roster (default: "Student")
//! - `STUDYKIT_VENUES`: Comma-separated, ordered list of bookable rooms
//! - `STUDYKIT_TIME_SLOTS`: Comma-separated, ordered list of booking slots
//! - `LOG_LEVEL`: Logging level (default: "info")

use eyre::{Result, eyre};
use std::env;
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_VENUES: [&str; 2] = ["Library Discussion Room", "Cyber Centre Meeting Room"];

pub const DEFAULT_TIME_SLOTS: [&str; 8] = [
    "09:00 - 10:00",
    "10:00 - 11:00",
    "11:00 - 12:00",
    "12:00 - 13:00",
    "13:00 - 14:00",
    "14:00 - 15:00",
    "15:00 - 16:00",
    "16:00 - 17:00",
];

/// Configuration for the StudyKit suite
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use studykit_app::config::AppConfig;
///
/// fn example() -> Result<()> {
///     let config = AppConfig::from_env()?;
///     println!("Data lives in {}", config.data_dir.display());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the roster, bookings, timetable and reminder files
    pub data_dir: PathBuf,

    /// Student name for the GPA roster
    pub student_name: String,

    /// Log level for the application
    pub log_level: Level,

    /// Bookable venues, in display order
    pub venues: Vec<String>,

    /// Bookable time slots, in display order
    pub time_slots: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            student_name: "Student".to_string(),
            log_level: Level::INFO,
            venues: DEFAULT_VENUES.iter().map(|v| v.to_string()).collect(),
            time_slots: DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if `STUDYKIT_VENUES` or
    /// `STUDYKIT_TIME_SLOTS` is set but lists nothing.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup("STUDYKIT_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let student_name = lookup("STUDYKIT_STUDENT_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.student_name);

        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let venues = match lookup("STUDYKIT_VENUES") {
            Some(raw) => parse_list("STUDYKIT_VENUES", &raw)?,
            None => defaults.venues,
        };

        let time_slots = match lookup("STUDYKIT_TIME_SLOTS") {
            Some(raw) => parse_list("STUDYKIT_TIME_SLOTS", &raw)?,
            None => defaults.time_slots,
        };

        Ok(Self {
            data_dir,
            student_name,
            log_level,
            venues,
            time_slots,
        })
    }
}

fn parse_list(key: &str, raw: &str) -> Result<Vec<String>> {
    let items: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        return Err(eyre!("{} must list at least one entry", key));
    }
    Ok(items)
}
