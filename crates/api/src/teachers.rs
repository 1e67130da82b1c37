use shared_types::{AppError, NewTeacher, Teacher};

use crate::client::segment;
use crate::{ApiClient, ValidateRequest};

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn get_teacher(&self, teacher_id: &str) -> Result<Teacher, AppError> {
        self.get_json(&format!("/api/teachers/{}", segment(teacher_id)))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, AppError> {
        self.get_json("/api/teachers").await
    }

    #[tracing::instrument(skip(self, teacher), fields(teacher_id = %teacher.teacher_id))]
    pub async fn create_teacher(&self, teacher: &NewTeacher) -> Result<Teacher, AppError> {
        teacher.validate_request()?;
        self.post_json("/api/teachers", teacher).await
    }
}
