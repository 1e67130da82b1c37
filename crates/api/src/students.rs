use shared_types::{AppError, NewStudent, Student};

use crate::client::{segment, with_query};
use crate::{ApiClient, ValidateRequest};

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn get_student(&self, admission_no: &str) -> Result<Student, AppError> {
        self.get_json(&format!("/api/students/{}", segment(admission_no)))
            .await
    }

    /// All students, or one class when `class_name` is given.
    #[tracing::instrument(skip(self))]
    pub async fn list_students(&self, class_name: Option<&str>) -> Result<Vec<Student>, AppError> {
        self.get_json(&with_query("/api/students", "class_name", class_name))
            .await
    }

    #[tracing::instrument(skip(self, student), fields(admission_no = %student.admission_no))]
    pub async fn create_student(&self, student: &NewStudent) -> Result<Student, AppError> {
        student.validate_request()?;
        self.post_json("/api/students", student).await
    }
}
