use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{AppError, Session};

/// HTTP client bound to one Backend API base URL and, optionally, a session token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Client for calls made on behalf of a signed-in user.
    pub fn for_session(base_url: impl Into<String>, session: &Session) -> Self {
        Self::new(base_url).with_token(session.token.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        Self::send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::send(self.request(Method::POST, path).json(body)).await
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Backend API unreachable");
            AppError::network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let err = AppError::from_status(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), kind = %err.kind, "Backend API returned an error");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "Backend API response did not match the expected shape");
            AppError::decode(e.to_string())
        })
    }
}

/// Percent-encode one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Append `?key=value` when a filter is present.
pub(crate) fn with_query(path: &str, key: &str, value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => format!("{}?{}={}", path, key, urlencoding::encode(v)),
        None => path.to_string(),
    }
}
