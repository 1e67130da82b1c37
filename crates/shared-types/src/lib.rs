pub mod config;
pub mod error;
pub mod models;
pub mod navigation;

// School domain modules
pub mod assignment;
pub mod attendance;
pub mod notification;
pub mod student;
pub mod teacher;

pub use config::*;
pub use error::*;
pub use models::*;

pub use assignment::*;
pub use attendance::*;
pub use notification::*;
pub use student::*;
pub use teacher::*;
// navigation is NOT glob re-exported: `Page` and `Redirect` are too generic
// next to the app's router types. Use shared_types::navigation::* explicitly.
