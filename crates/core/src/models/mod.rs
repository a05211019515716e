pub mod booking;
pub mod course;
pub mod event;
pub mod reminder;
