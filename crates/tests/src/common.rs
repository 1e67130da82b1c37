use std::collections::HashMap;
use std::sync::Arc;

use api::ApiClient;
use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A request as the stub backend saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    /// Parsed JSON body, `Value::Null` when empty or not JSON.
    pub body: Value,
}

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    body: String,
}

#[derive(Clone)]
struct StubState {
    responses: Arc<HashMap<(Method, String), Canned>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// Canned-response Backend API. Routes match on method and path; the query
/// string is recorded but ignored for matching. Anything unregistered
/// answers 404 with an empty body.
#[derive(Default)]
pub struct StubBackend {
    responses: HashMap<(Method, String), Canned>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 200 with a JSON body for `GET path`.
    pub fn get(self, path: &str, body: Value) -> Self {
        self.respond(Method::GET, path, StatusCode::OK, body.to_string())
    }

    /// 200 with a JSON body for `POST path`.
    pub fn post(self, path: &str, body: Value) -> Self {
        self.respond(Method::POST, path, StatusCode::OK, body.to_string())
    }

    pub fn respond(
        mut self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: impl Into<String>,
    ) -> Self {
        self.responses.insert(
            (method, path.to_string()),
            Canned {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Bind to an ephemeral local port and serve in the background.
    pub async fn spawn(self) -> RunningBackend {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            responses: Arc::new(self.responses),
            seen: seen.clone(),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Failed to read stub address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Stub backend stopped");
        });

        RunningBackend {
            base_url: format!("http://{}", addr),
            seen,
        }
    }
}

pub struct RunningBackend {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl RunningBackend {
    /// Client without a session token.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    pub fn client_with_token(&self, token: &str) -> ApiClient {
        self.client().with_token(token)
    }

    /// Every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().await.clone()
    }

    /// The single request received. Panics unless exactly one arrived.
    pub async fn only_request(&self) -> SeenRequest {
        let seen = self.requests().await;
        assert_eq!(seen.len(), 1, "expected exactly one request, got {:?}", seen);
        seen.into_iter().next().unwrap()
    }
}

/// Base URL of a port nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    format!("http://{}", addr)
}

async fn handle(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.seen.lock().await.push(SeenRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization,
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    let json = [(header::CONTENT_TYPE, "application/json")];
    match state.responses.get(&(method, uri.path().to_string())) {
        Some(canned) => (canned.status, json, canned.body.clone()),
        None => (StatusCode::NOT_FOUND, json, String::new()),
    }
}
