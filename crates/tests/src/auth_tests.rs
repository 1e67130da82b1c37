use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::navigation::{navigate, GuardPolicy, Navigation, Redirect};
use shared_types::{AppErrorKind, AuthStatus, LoginRequest, Role, StoredSession};

use crate::common::*;

const LOGIN: &str = "/api/auth/login";

fn credentials(unique_id: &str, password: &str, role: Role) -> LoginRequest {
    LoginRequest {
        unique_id: unique_id.to_string(),
        password: password.to_string(),
        role,
    }
}

#[tokio::test]
async fn login_returns_token_and_role() {
    let backend = StubBackend::new()
        .post(
            LOGIN,
            json!({ "token": "abc123", "role": "teacher", "unique_id": "T-17" }),
        )
        .spawn()
        .await;

    let resp = backend
        .client()
        .login(&credentials("T-17", "hunter2", Role::Teacher))
        .await
        .unwrap();

    assert_eq!(resp.token, "abc123");
    let session = resp.into_session().unwrap();
    assert_eq!(session.role, Role::Teacher);
    assert_eq!(session.unique_id, "T-17");

    let seen = backend.only_request().await;
    assert_eq!(seen.method, Method::POST);
    assert_eq!(seen.authorization, None);
    assert_eq!(seen.body["unique_id"], "T-17");
    assert_eq!(seen.body["role"], "teacher");
}

#[tokio::test]
async fn blank_credentials_never_reach_the_backend() {
    let backend = StubBackend::new().spawn().await;

    let err = backend
        .client()
        .login(&credentials("", "", Role::Student))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("unique_id").map(String::as_str),
        Some("Unique ID is required")
    );
    assert!(err.field_errors.contains_key("password"));
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let backend = StubBackend::new()
        .respond(Method::POST, LOGIN, StatusCode::UNAUTHORIZED, "Invalid credentials")
        .spawn()
        .await;

    let err = backend
        .client()
        .login(&credentials("ADM-1042", "wrong", Role::Student))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn login_with_unknown_role_lands_on_unauthorized() {
    let backend = StubBackend::new()
        .post(
            LOGIN,
            json!({ "token": "t", "role": "librarian", "unique_id": "L-1" }),
        )
        .spawn()
        .await;

    let resp = backend
        .client()
        .login(&credentials("L-1", "pw", Role::Admin))
        .await
        .unwrap();

    let status = AuthStatus::from_stored(Some(StoredSession::from(resp)));
    assert_eq!(status, AuthStatus::InvalidRole("librarian".to_string()));
    assert_eq!(
        navigate("/", &status, GuardPolicy::default()),
        Navigation::Redirect(Redirect::Unauthorized)
    );
    assert_eq!(
        navigate("/admin-dashboard", &status, GuardPolicy::default()),
        Navigation::Redirect(Redirect::Unauthorized)
    );
}
