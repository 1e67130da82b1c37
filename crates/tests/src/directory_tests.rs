use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, NewStudent, NewTeacher};

use crate::common::*;

fn student_json(admission_no: &str, name: &str, class_name: &str) -> serde_json::Value {
    json!({
        "admission_no": admission_no,
        "name": name,
        "class_name": class_name,
        "section": "A"
    })
}

// ── Students ───────────────────────────────────────────────────────

#[tokio::test]
async fn list_students_filters_by_class() {
    let backend = StubBackend::new()
        .get(
            "/api/students",
            json!([student_json("ADM-1", "Asha Rao", "10 A")]),
        )
        .spawn()
        .await;

    let students = backend
        .client_with_token("tok")
        .list_students(Some("10 A"))
        .await
        .unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Asha Rao");
    assert_eq!(students[0].guardian_name, None);

    let seen = backend.only_request().await;
    assert_eq!(seen.query.as_deref(), Some("class_name=10%20A"));
}

#[tokio::test]
async fn blank_class_filter_lists_everyone() {
    let backend = StubBackend::new()
        .get(
            "/api/students",
            json!([
                student_json("ADM-1", "Asha Rao", "10A"),
                student_json("ADM-2", "Ben Ito", "9B")
            ]),
        )
        .spawn()
        .await;

    let students = backend
        .client_with_token("tok")
        .list_students(Some("  "))
        .await
        .unwrap();

    assert_eq!(students.len(), 2);
    assert_eq!(backend.only_request().await.query, None);
}

#[tokio::test]
async fn get_student_reads_profile() {
    let backend = StubBackend::new()
        .get("/api/students/ADM-1042", student_json("ADM-1042", "Maya Chen", "8C"))
        .spawn()
        .await;

    let student = backend
        .client_with_token("tok")
        .get_student("ADM-1042")
        .await
        .unwrap();

    assert_eq!(student.class_name, "8C");
    assert_eq!(student.section, "A");
}

#[tokio::test]
async fn create_student_with_short_name_is_rejected_locally() {
    let backend = StubBackend::new().spawn().await;

    let err = backend
        .client_with_token("tok")
        .create_student(&NewStudent {
            admission_no: "ADM-5".to_string(),
            name: "A".to_string(),
            class_name: "10A".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("name"));
    assert!(backend.requests().await.is_empty());
}

// ── Teachers ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_teacher_returns_the_record() {
    let backend = StubBackend::new()
        .post(
            "/api/teachers",
            json!({
                "teacher_id": "T-17",
                "name": "Ravi Menon",
                "subject": "Physics",
                "class_name": "10A"
            }),
        )
        .spawn()
        .await;

    let teacher = backend
        .client_with_token("tok")
        .create_teacher(&NewTeacher {
            teacher_id: "T-17".to_string(),
            name: "Ravi Menon".to_string(),
            subject: "Physics".to_string(),
            class_name: Some("10A".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(teacher.teacher_id, "T-17");
    assert_eq!(teacher.class_name.as_deref(), Some("10A"));
    assert_eq!(teacher.email, None);

    let seen = backend.only_request().await;
    assert_eq!(seen.body["subject"], "Physics");
}

// ── Dashboard ──────────────────────────────────────────────────────

#[tokio::test]
async fn dashboard_summary_tolerates_missing_notification_count() {
    let backend = StubBackend::new()
        .get(
            "/api/dashboard/summary",
            json!({ "total_students": 412, "total_teachers": 23, "total_classes": 14 }),
        )
        .spawn()
        .await;

    let summary = backend
        .client_with_token("tok")
        .dashboard_summary()
        .await
        .unwrap();

    assert_eq!(summary.total_students, 412);
    assert_eq!(summary.total_classes, 14);
    assert_eq!(summary.total_notifications, 0);
}
