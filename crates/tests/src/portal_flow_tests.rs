use api::ApiClient;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::navigation::{navigate, GuardPolicy, Navigation, Page, Redirect, Shell};
use shared_types::{
    build_month, summarize, AttendanceSummary, AuthStatus, DayClass, LoginRequest, MonthCursor,
    Role, StoredSession,
};

use crate::common::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn student_backend() -> RunningBackend {
    StubBackend::new()
        .post(
            "/api/auth/login",
            json!({ "token": "stu-token", "role": "student", "unique_id": "ADM-1042" }),
        )
        .get(
            "/api/attendance/ADM-1042",
            json!([
                { "date": "2025-03-10", "status": "present" },
                { "date": "2025-03-11", "status": "absent" },
                { "date": "2025-03-23", "status": "present" }
            ]),
        )
        .spawn()
        .await
}

async fn sign_in(backend: &RunningBackend) -> AuthStatus {
    let resp = backend
        .client()
        .login(&LoginRequest {
            unique_id: "ADM-1042".to_string(),
            password: "pw".to_string(),
            role: Role::Student,
        })
        .await
        .unwrap();
    AuthStatus::from_stored(Some(StoredSession::from(resp)))
}

#[tokio::test]
async fn student_signs_in_and_reads_march_calendar() {
    let backend = student_backend().await;
    let status = sign_in(&backend).await;
    let policy = GuardPolicy::default();

    assert_eq!(
        navigate("/", &status, policy),
        Navigation::Redirect(Redirect::Home(Role::Student))
    );
    let entry = match navigate("/student-attendance", &status, policy) {
        Navigation::Render(entry) => entry,
        other => panic!("expected the attendance page, got {:?}", other),
    };
    assert_eq!(entry.shell, Shell::Student);
    assert_eq!(entry.page, Page::StudentAttendance);

    let session = status.session().unwrap();
    let client = ApiClient::for_session(backend.base_url.clone(), session);
    let attendance = client.fetch_attendance(&session.unique_id).await.unwrap();

    let march = build_month(MonthCursor::new(2025, 3).unwrap(), &attendance);
    assert_eq!(march.len(), 31);

    let class_of = |d: u32| {
        march
            .iter()
            .find(|day| day.date == date(2025, 3, d))
            .map(|day| day.class)
    };
    assert_eq!(class_of(10), Some(DayClass::Present));
    assert_eq!(class_of(11), Some(DayClass::Absent));
    assert_eq!(class_of(12), Some(DayClass::NotUploaded));
    // Saturday without a record
    assert_eq!(class_of(15), Some(DayClass::NotUploaded));
    assert_eq!(class_of(16), Some(DayClass::Weekend));
    // a recorded Sunday shows the record
    assert_eq!(class_of(23), Some(DayClass::Present));

    assert_eq!(
        summarize(&march),
        AttendanceSummary {
            present: 2,
            absent: 1,
            weekend: 4,
            not_uploaded: 24,
        }
    );

    let seen = backend.requests().await;
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1].authorization.as_deref(), Some("Bearer stu-token"));
}

#[tokio::test]
async fn paging_back_a_month_reuses_the_same_map() {
    let backend = student_backend().await;
    let status = sign_in(&backend).await;
    let session = status.session().unwrap();
    let attendance = ApiClient::for_session(backend.base_url.clone(), session)
        .fetch_attendance("ADM-1042")
        .await
        .unwrap();

    let february = MonthCursor::new(2025, 3).unwrap().prev();
    assert_eq!(february.title(), "February 2025");

    let summary = summarize(&build_month(february, &attendance));
    assert_eq!(summary.present + summary.absent, 0);
    assert_eq!(summary.weekend, 4);
    assert_eq!(summary.not_uploaded, 24);
    assert_eq!(summary.percentage(), None);
}

#[tokio::test]
async fn student_session_cannot_open_other_shells() {
    let backend = student_backend().await;
    let status = sign_in(&backend).await;

    for path in ["/teacher-dashboard", "/admin-students", "/principal-notifications"] {
        assert_eq!(
            navigate(path, &status, GuardPolicy::default()),
            Navigation::Redirect(Redirect::Unauthorized),
            "{path}"
        );
    }

    let relaxed = GuardPolicy {
        enforce_role_match: false,
    };
    assert!(matches!(
        navigate("/teacher-dashboard", &status, relaxed),
        Navigation::Render(entry) if entry.shell == Shell::Teacher
    ));
}

#[tokio::test]
async fn signed_out_visitor_is_sent_to_login() {
    let status = AuthStatus::from_storage_json(None);

    assert_eq!(
        navigate("/student-attendance", &status, GuardPolicy::default()),
        Navigation::Redirect(Redirect::Login)
    );
    assert_eq!(
        navigate("/no-such-page", &status, GuardPolicy::default()),
        Navigation::NotFound
    );
}
