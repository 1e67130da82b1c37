use axum::http::Method;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, AttendanceEntry, AttendanceSheet, AttendanceStatus};

use crate::common::*;

fn sheet(entries: Vec<AttendanceEntry>) -> AttendanceSheet {
    AttendanceSheet {
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        class_name: "10A".to_string(),
        entries,
    }
}

fn entry(admission_no: &str, status: AttendanceStatus) -> AttendanceEntry {
    AttendanceEntry {
        admission_no: admission_no.to_string(),
        status,
    }
}

#[tokio::test]
async fn mark_attendance_posts_the_sheet() {
    let backend = StubBackend::new()
        .post("/api/attendance", json!({ "message": "Attendance saved" }))
        .spawn()
        .await;

    let resp = backend
        .client_with_token("teacher-token")
        .mark_attendance(&sheet(vec![
            entry("ADM-1", AttendanceStatus::Present),
            entry("ADM-2", AttendanceStatus::Absent),
        ]))
        .await
        .unwrap();
    assert_eq!(resp.message, "Attendance saved");

    let seen = backend.only_request().await;
    assert_eq!(seen.method, Method::POST);
    assert_eq!(seen.authorization.as_deref(), Some("Bearer teacher-token"));
    assert_eq!(seen.body["date"], "2025-03-10");
    assert_eq!(seen.body["class_name"], "10A");
    assert_eq!(seen.body["entries"][1]["admission_no"], "ADM-2");
    assert_eq!(seen.body["entries"][1]["status"], "absent");
}

#[tokio::test]
async fn empty_sheet_is_rejected_before_sending() {
    let backend = StubBackend::new()
        .post("/api/attendance", json!({ "message": "Attendance saved" }))
        .spawn()
        .await;

    let err = backend
        .client_with_token("teacher-token")
        .mark_attendance(&sheet(vec![]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("entries"));
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn conflict_from_backend_is_surfaced() {
    let backend = StubBackend::new()
        .respond(
            Method::POST,
            "/api/attendance",
            axum::http::StatusCode::CONFLICT,
            r#"{"kind":"Conflict","message":"Attendance already marked for 10A on 2025-03-10"}"#,
        )
        .spawn()
        .await;

    let err = backend
        .client_with_token("teacher-token")
        .mark_attendance(&sheet(vec![entry("ADM-1", AttendanceStatus::Present)]))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "Attendance already marked for 10A on 2025-03-10");
}
