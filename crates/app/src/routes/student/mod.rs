pub mod assignments;
pub mod attendance;
pub mod dashboard;
