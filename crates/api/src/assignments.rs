use shared_types::{AppError, Assignment, AssignmentSubmission, MessageResponse, NewAssignment};

use crate::client::with_query;
use crate::{ApiClient, ValidateRequest};

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_assignments(&self, class_name: Option<&str>) -> Result<Vec<Assignment>, AppError> {
        self.get_json(&with_query("/api/assignments", "class_name", class_name))
            .await
    }

    #[tracing::instrument(skip(self, assignment), fields(title = %assignment.title))]
    pub async fn post_assignment(&self, assignment: &NewAssignment) -> Result<Assignment, AppError> {
        assignment.validate_request()?;
        self.post_json("/api/assignments", assignment).await
    }

    #[tracing::instrument(skip(self, submission), fields(admission_no = %submission.admission_no))]
    pub async fn submit_assignment(
        &self,
        assignment_id: i64,
        submission: &AssignmentSubmission,
    ) -> Result<MessageResponse, AppError> {
        submission.validate_request()?;
        self.post_json(
            &format!("/api/assignments/{}/submissions", assignment_id),
            submission,
        )
        .await
    }
}
