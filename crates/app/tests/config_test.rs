use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;
use std::path::PathBuf;
use studykit_app::config::{AppConfig, DEFAULT_TIME_SLOTS, DEFAULT_VENUES};
use tracing::Level;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(config.data_dir, PathBuf::from("data"));
    assert_eq!(config.student_name, "Student");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.venues, DEFAULT_VENUES.to_vec());
    assert_eq!(config.time_slots.len(), DEFAULT_TIME_SLOTS.len());
    assert_eq!(config.time_slots[0], "09:00 - 10:00");
    assert_eq!(config.time_slots[7], "16:00 - 17:00");
}

#[test]
fn test_overrides() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("STUDYKIT_DATA_DIR", "/tmp/studykit"),
        ("STUDYKIT_STUDENT_NAME", "  Aisha  "),
        ("STUDYKIT_VENUES", "Room A, Room B ,Room C"),
        ("STUDYKIT_TIME_SLOTS", "08:00 - 09:00"),
    ]))
    .unwrap();

    assert_eq!(config.data_dir, PathBuf::from("/tmp/studykit"));
    assert_eq!(config.student_name, "Aisha");
    assert_eq!(config.venues, vec!["Room A", "Room B", "Room C"]);
    assert_eq!(config.time_slots, vec!["08:00 - 09:00"]);
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("STUDYKIT_DATA_DIR", "   "),
        ("STUDYKIT_STUDENT_NAME", ""),
    ]))
    .unwrap();

    assert_eq!(config.data_dir, PathBuf::from("data"));
    assert_eq!(config.student_name, "Student");
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_log_level(#[case] raw: &str, #[case] expected: Level) {
    let config = AppConfig::from_lookup(lookup_from(&[("LOG_LEVEL", raw)])).unwrap();
    assert_eq!(config.log_level, expected);
}

#[rstest]
#[case("STUDYKIT_VENUES")]
#[case("STUDYKIT_TIME_SLOTS")]
fn test_empty_list_is_rejected(#[case] key: &str) {
    let err = AppConfig::from_lookup(lookup_from(&[(key, " , ,")])).unwrap_err();
    assert_eq!(err.to_string(), format!("{} must list at least one entry", key));
}
