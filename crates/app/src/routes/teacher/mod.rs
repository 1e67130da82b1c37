pub mod assignments;
pub mod dashboard;
pub mod mark_attendance;
pub mod roster;
