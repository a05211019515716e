use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use studykit_app::handlers::timetable::TimetableHandler;
use studykit_core::errors::StudyError;
use studykit_store::{
    mock::repositories::MockTimetableRepo, open_data_dir, repositories::LoadReport,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

fn empty_store() -> MockTimetableRepo {
    let mut store = MockTimetableRepo::new();
    store
        .expect_load_events()
        .return_once(|| Ok(LoadReport::loaded(Vec::new(), Vec::new())));
    store
}

#[test_log::test]
fn test_add_and_list_day() {
    let mut store = empty_store();
    store.expect_save_events().times(3).returning(|_| Ok(()));

    let mut handler = TimetableHandler::open(store);
    handler.add_event("2024-05-06", "14:00", "Lab").unwrap();
    handler.add_event("2024-05-06", "09:00", "Lecture").unwrap();
    handler.add_event("2024-05-20", "10:00", "Exam").unwrap();

    let names: Vec<&str> = handler
        .events_on(date(6))
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Lecture", "Lab"]);
    assert_eq!(
        handler.busy_days(2024, 5).into_iter().collect::<Vec<_>>(),
        vec![date(6), date(20)]
    );
    assert!(handler.busy_days(2024, 6).is_empty());
}

#[test]
fn test_add_rejects_bad_input() {
    let mut store = empty_store();
    store.expect_save_events().times(0);

    let mut handler = TimetableHandler::open(store);

    let err = handler.add_event("06/05/2024", "09:00", "Lecture").unwrap_err();
    assert!(matches!(err, StudyError::InvalidInput(_)));

    let err = handler.add_event("2024-05-06", "", "Lecture").unwrap_err();
    assert_eq!(err.detail(), "Please enter both time and event name.");

    let err = handler.add_event("2024-05-06", "9am", "Lecture").unwrap_err();
    assert_eq!(err.detail(), "Please enter time as HH:MM.");

    assert!(handler.book().is_empty());
}

#[test_log::test]
fn test_edit_and_delete() {
    let mut store = empty_store();
    store.expect_save_events().times(3).returning(|_| Ok(()));

    let mut handler = TimetableHandler::open(store);
    let event = handler.add_event("2024-05-06", "09:00", "Lecture").unwrap();

    let edited = handler.edit_event(event.id, "10:30", "Tutorial").unwrap();
    assert_eq!(edited.date, date(6));
    assert_eq!(edited.time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    assert_eq!(edited.name, "Tutorial");

    handler.delete_event(event.id).unwrap();
    assert!(handler.events_on(date(6)).is_empty());

    let err = handler.delete_event(event.id).unwrap_err();
    assert!(matches!(err, StudyError::NotFound(_)));
}

#[test_log::test]
fn test_save_failure_keeps_event() {
    let mut store = empty_store();
    store
        .expect_save_events()
        .returning(|_| Err(eyre::eyre!("disk full")));

    let mut handler = TimetableHandler::open(store);
    let err = handler.add_event("2024-05-06", "09:00", "Lecture").unwrap_err();

    assert!(matches!(err, StudyError::StorageUnavailable(_)));
    assert_eq!(handler.events_on(date(6)).len(), 1);
}

#[test_log::test]
fn test_events_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = open_data_dir(dir.path()).unwrap();

    let mut handler = TimetableHandler::open(data_dir.timetable());
    handler.add_event("2024-05-06", "09:00", "Lecture").unwrap();
    handler.add_event("2024-05-07", "13:15", "Study group").unwrap();

    let reopened = TimetableHandler::open(data_dir.timetable());
    assert_eq!(reopened.load_warning(), None);
    assert_eq!(reopened.book().len(), 2);
    assert_eq!(reopened.events_on(date(7))[0].time_label(), "13:15");
    assert_eq!(reopened.events_on(date(7))[0].name, "Study group");
}
