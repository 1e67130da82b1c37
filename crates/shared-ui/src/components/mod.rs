// Standalone components
pub mod button;
pub mod data_table;
pub mod form;
pub mod page_header;
pub mod panel;
pub mod status;

// Stateful components
pub mod attendance_calendar;
pub mod sidebar;

// Re-exports for convenience
pub use attendance_calendar::*;
pub use button::*;
pub use data_table::*;
pub use form::*;
pub use page_header::*;
pub use panel::*;
pub use sidebar::*;
pub use status::*;
