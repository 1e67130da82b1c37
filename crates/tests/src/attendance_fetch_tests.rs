use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, AttendanceStatus};

use crate::common::*;

const PATH: &str = "/api/attendance/ADM-1042";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn fetch_builds_map_keyed_by_date() {
    let backend = StubBackend::new()
        .get(
            PATH,
            json!([
                { "date": "2025-03-10", "status": "present" },
                { "date": "2025-03-11", "status": "absent" },
                { "date": "2025-03-12", "status": "present" }
            ]),
        )
        .spawn()
        .await;

    let map = backend
        .client_with_token("tok")
        .fetch_attendance("ADM-1042")
        .await
        .unwrap();

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(date(2025, 3, 10)), Some(AttendanceStatus::Present));
    assert_eq!(map.get(date(2025, 3, 11)), Some(AttendanceStatus::Absent));
    assert_eq!(map.get(date(2025, 3, 13)), None);
}

#[tokio::test]
async fn later_record_for_same_date_wins() {
    let backend = StubBackend::new()
        .get(
            PATH,
            json!([
                { "date": "2025-03-10", "status": "absent" },
                { "date": "2025-03-10", "status": "present" }
            ]),
        )
        .spawn()
        .await;

    let client = backend.client_with_token("tok");
    let records = client.fetch_attendance_records("ADM-1042").await.unwrap();
    assert_eq!(records.len(), 2);

    let map = client.fetch_attendance("ADM-1042").await.unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(date(2025, 3, 10)), Some(AttendanceStatus::Present));
}

#[tokio::test]
async fn empty_history_is_an_empty_map() {
    let backend = StubBackend::new().get(PATH, json!([])).spawn().await;

    let map = backend
        .client_with_token("tok")
        .fetch_attendance("ADM-1042")
        .await
        .unwrap();

    assert!(map.is_empty());
}

#[tokio::test]
async fn fetch_sends_bearer_token() {
    let backend = StubBackend::new().get(PATH, json!([])).spawn().await;

    backend
        .client_with_token("secret-token")
        .fetch_attendance("ADM-1042")
        .await
        .unwrap();

    let seen = backend.only_request().await;
    assert_eq!(seen.path, PATH);
    assert_eq!(seen.authorization.as_deref(), Some("Bearer secret-token"));
}

#[tokio::test]
async fn unknown_status_value_is_a_decode_error() {
    let backend = StubBackend::new()
        .get(PATH, json!([{ "date": "2025-03-10", "status": "late" }]))
        .spawn()
        .await;

    let err = backend
        .client_with_token("tok")
        .fetch_attendance("ADM-1042")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn record_without_date_is_a_decode_error() {
    let backend = StubBackend::new()
        .get(PATH, json!([{ "status": "present" }]))
        .spawn()
        .await;

    let err = backend
        .client_with_token("tok")
        .fetch_attendance("ADM-1042")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn unknown_student_is_not_found() {
    let backend = StubBackend::new().spawn().await;

    let err = backend
        .client_with_token("tok")
        .fetch_attendance("ADM-9999")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
}
