use pretty_assertions::assert_eq;
use studykit_app::handlers::gpa::{GpaHandler, LoadSummary, parse_course_form};
use studykit_core::{
    errors::StudyError,
    models::course::{Course, Grade},
};
use studykit_store::{
    mock::repositories::MockRosterRepo,
    repositories::{LoadReport, SkippedRecord},
};

fn course(name: &str, credit: i64, marks: i64) -> Course {
    Course::new(name, credit, marks).unwrap()
}

#[test]
fn test_add_edit_delete_courses() {
    let mut handler = GpaHandler::new("Aisha", MockRosterRepo::new());

    assert_eq!(handler.add_course("Math", "3", "85").unwrap(), 0);
    assert_eq!(handler.add_course(" Physics ", "4", "72").unwrap(), 1);

    handler.edit_course(0, "Calculus", "3", "91").unwrap();
    let courses = handler.student().courses();
    assert_eq!(courses[0].name(), "Calculus");
    assert_eq!(courses[0].grade(), Grade::A);
    assert_eq!(courses[1].name(), "Physics");

    let removed = handler.delete_course(1).unwrap();
    assert_eq!(removed.name(), "Physics");
    assert_eq!(handler.student().courses().len(), 1);
}

#[test]
fn test_form_validation_order() {
    let err = parse_course_form("", "abc", "abc").unwrap_err();
    assert_eq!(err.detail(), "Course name cannot be empty");

    let err = parse_course_form("Math", "abc", "abc").unwrap_err();
    assert_eq!(err.detail(), "Credit hours must be positive");

    let err = parse_course_form("Math", "0", "50").unwrap_err();
    assert_eq!(err.detail(), "Credit hours must be positive");

    let err = parse_course_form("Math", "3", "101").unwrap_err();
    assert_eq!(err.detail(), "Marks must be 0-100");
}

#[test]
fn test_edit_without_selection() {
    let mut handler = GpaHandler::new("Aisha", MockRosterRepo::new());

    let err = handler.edit_course(0, "Math", "3", "85").unwrap_err();
    assert!(matches!(err, StudyError::NotFound(ref m) if m == "Select a course first"));

    let err = handler.delete_course(0).unwrap_err();
    assert!(matches!(err, StudyError::NotFound(_)));
}

#[test]
fn test_summary() {
    let mut handler = GpaHandler::new("Aisha", MockRosterRepo::new());
    handler.add_course("Math", "3", "85").unwrap();
    handler.add_course("Physics", "4", "72").unwrap();
    handler.add_course("Art", "2", "40").unwrap();

    let summary = handler.summary();
    assert_eq!(summary.student, "Aisha");
    assert_eq!(summary.total_credits, 9);
    assert_eq!(summary.course_count, 3);
    // (3 * 4.0 + 4 * 3.5 + 2 * 0.0) / 9
    assert_eq!(summary.gpa, 2.8889);
    assert_eq!(summary.distribution[&Grade::A], 1);
    assert_eq!(summary.distribution[&Grade::BPlus], 1);
    assert_eq!(summary.distribution[&Grade::F], 1);
    assert_eq!(summary.distribution[&Grade::CPlus], 0);
}

#[test]
fn test_empty_roster_gpa_is_zero() {
    let handler = GpaHandler::new("Aisha", MockRosterRepo::new());
    assert_eq!(handler.summary().gpa, 0.0);
}

#[test]
fn test_save_writes_all_courses() {
    let mut store = MockRosterRepo::new();
    store
        .expect_save_roster()
        .withf(|courses| courses.len() == 2 && courses[1].name() == "Physics")
        .times(1)
        .returning(|_| Ok(()));

    let mut handler = GpaHandler::new("Aisha", store);
    handler.add_course("Math", "3", "85").unwrap();
    handler.add_course("Physics", "4", "72").unwrap();

    handler.save().unwrap();
}

#[test]
fn test_save_empty_roster_is_rejected() {
    let mut store = MockRosterRepo::new();
    store.expect_save_roster().times(0);

    let handler = GpaHandler::new("Aisha", store);
    let err = handler.save().unwrap_err();

    assert!(matches!(err, StudyError::InvalidInput(ref m) if m == "There are no courses to save!"));
}

#[test]
fn test_save_failure_is_storage_unavailable() {
    let mut store = MockRosterRepo::new();
    store
        .expect_save_roster()
        .returning(|_| Err(eyre::eyre!("permission denied")));

    let mut handler = GpaHandler::new("Aisha", store);
    handler.add_course("Math", "3", "85").unwrap();

    let err = handler.save().unwrap_err();
    assert!(matches!(err, StudyError::StorageUnavailable(_)));
    assert_eq!(handler.student().courses().len(), 1);
}

#[test]
fn test_load_replaces_roster() {
    let mut store = MockRosterRepo::new();
    store.expect_load_roster().times(1).returning(|| {
        Ok(LoadReport::loaded(
            vec![course("Chemistry", 3, 66)],
            vec![SkippedRecord {
                position: 2,
                reason: "expected 3 fields".to_string(),
            }],
        ))
    });

    let mut handler = GpaHandler::new("Aisha", store);
    handler.add_course("Math", "3", "85").unwrap();

    let summary = handler.load().unwrap();
    assert_eq!(summary, LoadSummary::Loaded { count: 1, skipped: 1 });
    assert_eq!(handler.student().courses().len(), 1);
    assert_eq!(handler.student().courses()[0].name(), "Chemistry");
}

#[test]
fn test_load_without_valid_courses_keeps_roster() {
    let mut store = MockRosterRepo::new();
    store.expect_load_roster().returning(|| {
        Ok(LoadReport::loaded(
            Vec::new(),
            vec![SkippedRecord {
                position: 1,
                reason: "Marks must be 0-100".to_string(),
            }],
        ))
    });

    let mut handler = GpaHandler::new("Aisha", store);
    handler.add_course("Math", "3", "85").unwrap();

    assert_eq!(handler.load().unwrap(), LoadSummary::Empty { skipped: 1 });
    assert_eq!(handler.student().courses()[0].name(), "Math");
}

#[test]
fn test_load_missing_file() {
    let mut store = MockRosterRepo::new();
    store.expect_load_roster().returning(|| Ok(LoadReport::missing()));

    let mut handler = GpaHandler::new("Aisha", store);
    assert_eq!(handler.load().unwrap(), LoadSummary::Missing);
}

#[test]
fn test_load_read_error() {
    let mut store = MockRosterRepo::new();
    store
        .expect_load_roster()
        .returning(|| Err(eyre::eyre!("is a directory")));

    let mut handler = GpaHandler::new("Aisha", store);
    assert!(matches!(handler.load(), Err(StudyError::StorageUnavailable(_))));
}
