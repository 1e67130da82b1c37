use shared_types::{AppError, LoginRequest, LoginResponse};

use crate::{ApiClient, ValidateRequest};

impl ApiClient {
    /// Exchange credentials for a token. The role in the answer is left as a
    /// string so the caller can route unknown roles to `/unauthorized`.
    #[tracing::instrument(skip(self, request), fields(unique_id = %request.unique_id, role = request.role.as_str()))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate_request()?;
        let response: LoginResponse = self.post_json("/api/auth/login", request).await?;
        tracing::info!(role = %response.role, "Signed in");
        Ok(response)
    }
}
