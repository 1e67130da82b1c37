use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{AuthStatus, Session, StoredSession};

use crate::config::app_config;

/// Browser local storage key holding the `StoredSession` JSON.
pub const SESSION_STORAGE_KEY: &str = "campus_sync_session";

/// Application-wide session store. The only code that touches local storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStore {
    status: Signal<AuthStatus>,
    restored: Signal<bool>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            status: Signal::new(AuthStatus::Anonymous),
            restored: Signal::new(false),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status.read().clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.status.read().session().cloned()
    }

    /// Unique id of the signed-in user, empty when anonymous.
    pub fn unique_id(&self) -> String {
        self.session().map(|s| s.unique_id).unwrap_or_default()
    }

    /// False until the persisted session has been read back.
    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    /// Adopt the session read from storage. Ignored once a sign-in or
    /// sign-out has already happened in this tab.
    pub fn restore(&mut self, raw: Option<&str>) {
        if *self.restored.peek() {
            return;
        }
        let status = AuthStatus::from_storage_json(raw);
        match &status {
            AuthStatus::Authenticated(session) => {
                tracing::debug!(role = session.role.as_str(), "Restored session")
            }
            AuthStatus::InvalidRole(role) => tracing::warn!(%role, "Stored session has an unknown role"),
            AuthStatus::Anonymous => {}
        }
        self.status.set(status);
        self.restored.set(true);
    }

    pub fn sign_in(&mut self, stored: StoredSession) -> AuthStatus {
        persist(&stored);
        let status = AuthStatus::from_stored(Some(stored));
        self.status.set(status.clone());
        self.restored.set(true);
        status
    }

    pub fn sign_out(&mut self) {
        clear_persisted();
        self.status.set(AuthStatus::Anonymous);
        self.restored.set(true);
    }

    /// API client carrying the current session's token, if any.
    pub fn client(&self) -> ApiClient {
        let base_url = app_config().api.base_url.clone();
        match self.session() {
            Some(session) => ApiClient::for_session(base_url, &session),
            None => ApiClient::new(base_url),
        }
    }
}

/// Hook to access the session store.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

/// Read the raw stored session JSON, if any.
pub async fn read_persisted() -> Option<String> {
    let mut eval = document::eval(&format!(
        "dioxus.send(window.localStorage.getItem('{SESSION_STORAGE_KEY}'));"
    ));
    match eval.recv::<Option<String>>().await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = ?e, "Could not read the stored session");
            None
        }
    }
}

fn persist(stored: &StoredSession) {
    // Serialize twice: once to JSON, once more to a quoted JS string literal.
    let literal = serde_json::to_string(stored).and_then(|json| serde_json::to_string(&json));
    match literal {
        Ok(literal) => {
            document::eval(&format!(
                "window.localStorage.setItem('{SESSION_STORAGE_KEY}', {literal});"
            ));
        }
        Err(e) => tracing::warn!(error = %e, "Failed to serialize session"),
    }
}

fn clear_persisted() {
    document::eval(&format!(
        "window.localStorage.removeItem('{SESSION_STORAGE_KEY}');"
    ));
}
