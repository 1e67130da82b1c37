use shared_types::{AppError, Audience, NewNotification, Notification};

use crate::client::with_query;
use crate::{ApiClient, ValidateRequest};

impl ApiClient {
    /// Notifications for an audience. `Audience::All` asks for everything.
    #[tracing::instrument(skip(self))]
    pub async fn list_notifications(&self, audience: Audience) -> Result<Vec<Notification>, AppError> {
        let filter = match audience {
            Audience::All => None,
            other => Some(other.as_str()),
        };
        self.get_json(&with_query("/api/notifications", "audience", filter))
            .await
    }

    #[tracing::instrument(skip(self, notification), fields(title = %notification.title))]
    pub async fn post_notification(
        &self,
        notification: &NewNotification,
    ) -> Result<Notification, AppError> {
        notification.validate_request()?;
        self.post_json("/api/notifications", notification).await
    }
}
