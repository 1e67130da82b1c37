use shared_types::{AppError, DashboardSummary};

use crate::ApiClient;

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, AppError> {
        self.get_json("/api/dashboard/summary").await
    }
}
