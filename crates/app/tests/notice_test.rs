use pretty_assertions::assert_eq;
use rstest::rstest;
use studykit_app::notice::{Notice, Severity};
use studykit_core::errors::StudyError;

#[rstest]
#[case(StudyError::InvalidInput("Marks must be 0-100".into()), Severity::Warning, "Input Error")]
#[case(StudyError::Conflict("Room taken".into()), Severity::Error, "Booking Conflict")]
#[case(StudyError::NotFound("Select a course first".into()), Severity::Warning, "No Selection")]
#[case(StudyError::StorageUnavailable(eyre::eyre!("disk full")), Severity::Error, "Storage Error")]
fn test_error_categories(#[case] err: StudyError, #[case] severity: Severity, #[case] title: &str) {
    let notice = Notice::from(&err);

    assert_eq!(notice.severity, severity);
    assert_eq!(notice.title, title);
}

#[test]
fn test_message_has_no_category_prefix() {
    let notice = Notice::from(StudyError::InvalidInput("Marks must be 0-100".into()));

    assert_eq!(notice.message, "Marks must be 0-100");
    assert_eq!(notice.to_string(), "Input Error: Marks must be 0-100");
}

#[test]
fn test_info_and_warning_constructors() {
    let info = Notice::info("Saved", "Data saved successfully!");
    assert_eq!(info.severity, Severity::Info);
    assert_eq!(info.message, "Data saved successfully!");

    let warning = Notice::warning("Bookings", String::from("Skipped 2 invalid record(s)"));
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.to_string(), "Bookings: Skipped 2 invalid record(s)");
}
