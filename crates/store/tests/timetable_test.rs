use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::fs;
use studykit_core::timetable::EventBook;
use studykit_store::repositories::{
    TimetableStore,
    timetable::{TimetableFile, parse_timetable},
};

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timetable.txt");
    let store = TimetableFile::new(&path);

    let mut book = EventBook::new();
    let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
    book.add(date, "14:00", "Lab").unwrap();
    book.add(date, "08:30", "Lecture").unwrap();

    store.save_events(book.events()).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "2025-02-03 | 14:00 | Lab\n2025-02-03 | 08:30 | Lecture\n"
    );

    let report = store.load_events().unwrap();
    let loaded: Vec<(NaiveDate, String, String)> = report
        .records
        .iter()
        .map(|e| (e.date, e.time_label(), e.name.clone()))
        .collect();
    assert_eq!(
        loaded,
        vec![
            (date, "14:00".to_string(), "Lab".to_string()),
            (date, "08:30".to_string(), "Lecture".to_string()),
        ]
    );
}

#[test]
fn test_malformed_lines_are_skipped() {
    let report = parse_timetable(
        "2025-02-03 | 14:00 | Lab\n2025-02-03 | Lab\n2025-13-01 | 10:00 | Exam\n2025-02-04 | noon | Lunch\n",
    );

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.skipped.len(), 3);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = TimetableFile::new(dir.path().join("timetable.txt"))
        .load_events()
        .unwrap();

    assert!(report.missing);
}
