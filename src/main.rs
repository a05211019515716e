use color_eyre::eyre::Result;
use dotenv::dotenv;
use studykit_app::{config::AppConfig, init_tracing, open_suite};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env()?;
    init_tracing(config.log_level)?;

    let suite = open_suite(&config)?;
    for notice in suite.startup_notices() {
        warn!("{}", notice);
    }

    let summary = suite.gpa.summary();
    info!(
        "{}: GPA {:.2} over {} credit(s) in {} course(s)",
        summary.student, summary.gpa, summary.total_credits, summary.course_count
    );

    let today = suite.bookings.availability_today();
    info!(
        "{} booking(s) on file, {} free slot(s) today ({})",
        suite.bookings.ledger().len(),
        today.free_count(),
        today.date
    );

    let events = suite.timetable.events_on(today.date);
    info!("{} event(s) today", events.len());
    for event in events {
        info!("  {} {}", event.time_label(), event.name);
    }

    for reminder in suite.reminders.check_due() {
        info!("Reminder due: {} ({})", reminder.task, reminder.due_label());
    }

    Ok(())
}
