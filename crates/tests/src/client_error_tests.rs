use api::ApiClient;
use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::*;

// ── Transport and status mapping ───────────────────────────────────

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = ApiClient::new(unreachable_base_url().await).with_token("tok");

    let err = client.dashboard_summary().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert!(!err.friendly_message().is_empty());
}

#[tokio::test]
async fn plain_text_server_error_keeps_its_text() {
    let backend = StubBackend::new()
        .respond(
            Method::GET,
            "/api/dashboard/summary",
            StatusCode::INTERNAL_SERVER_ERROR,
            "database is down",
        )
        .spawn()
        .await;

    let err = backend
        .client_with_token("tok")
        .dashboard_summary()
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "database is down");
}

#[tokio::test]
async fn empty_error_body_gets_a_stock_message() {
    let backend = StubBackend::new()
        .respond(Method::GET, "/api/teachers", StatusCode::FORBIDDEN, "")
        .spawn()
        .await;

    let err = backend
        .client_with_token("tok")
        .list_teachers()
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Request failed with status 403");
}

#[tokio::test]
async fn structured_error_body_passes_through() {
    let backend = StubBackend::new()
        .respond(
            Method::POST,
            "/api/students",
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"kind":"ValidationError","message":"Validation failed","field_errors":{"admission_no":"Already enrolled"}}"#,
        )
        .spawn()
        .await;

    let student = shared_types::NewStudent {
        admission_no: "ADM-1".to_string(),
        name: "Asha Rao".to_string(),
        class_name: "10A".to_string(),
        ..Default::default()
    };
    let err = backend
        .client_with_token("tok")
        .create_student(&student)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("admission_no").map(String::as_str),
        Some("Already enrolled")
    );
}

#[tokio::test]
async fn success_with_non_json_body_is_a_decode_error() {
    let backend = StubBackend::new()
        .respond(
            Method::GET,
            "/api/dashboard/summary",
            StatusCode::OK,
            "<html>maintenance</html>",
        )
        .spawn()
        .await;

    let err = backend
        .client_with_token("tok")
        .dashboard_summary()
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}
