use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Audience, NewNotification};

use crate::common::*;

const PATH: &str = "/api/notifications";

fn notice(id: i64, audience: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Sports day",
        "message": "Friday on the main ground",
        "audience": audience,
        "posted_at": "2025-03-10T08:00:00Z",
        "posted_by": "P-1"
    })
}

#[tokio::test]
async fn student_feed_asks_for_students_audience() {
    let backend = StubBackend::new()
        .get(PATH, json!([notice(1, "students")]))
        .spawn()
        .await;

    let notes = backend
        .client_with_token("tok")
        .list_notifications(Audience::Students)
        .await
        .unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].audience, Audience::Students);
    assert_eq!(backend.only_request().await.query.as_deref(), Some("audience=students"));
}

#[tokio::test]
async fn all_audience_sends_no_filter() {
    let backend = StubBackend::new()
        .get(PATH, json!([notice(1, "teachers"), notice(2, "all")]))
        .spawn()
        .await;

    let notes = backend
        .client_with_token("tok")
        .list_notifications(Audience::All)
        .await
        .unwrap();

    assert_eq!(notes.len(), 2);
    assert_eq!(backend.only_request().await.query, None);
}

#[tokio::test]
async fn post_notification_sends_audience() {
    let backend = StubBackend::new()
        .post(PATH, notice(7, "teachers"))
        .spawn()
        .await;

    let posted = backend
        .client_with_token("principal-token")
        .post_notification(&NewNotification {
            title: "Staff meeting".to_string(),
            message: "Monday 8am in the library".to_string(),
            audience: Audience::Teachers,
        })
        .await
        .unwrap();
    assert_eq!(posted.id, 7);

    let seen = backend.only_request().await;
    assert_eq!(seen.body["audience"], "teachers");
    assert_eq!(seen.body["title"], "Staff meeting");
}

#[tokio::test]
async fn overlong_title_is_rejected_locally() {
    let backend = StubBackend::new().spawn().await;

    let err = backend
        .client_with_token("tok")
        .post_notification(&NewNotification {
            title: "x".repeat(121),
            message: "body".to_string(),
            audience: Audience::All,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("title"));
    assert!(backend.requests().await.is_empty());
}
