mod students;
mod teachers;

pub use students::{StudentDirectoryPage, StudentTable};
pub use teachers::TeacherDirectoryPage;
