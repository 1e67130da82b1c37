use dioxus::prelude::*;
use shared_types::{summarize_records, Student};
use shared_ui::{
    DetailList, ErrorState, LoadingState, PageHeader, Panel, StatGrid, StatTile,
};

use crate::format_helpers::format_percentage;
use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn StudentDashboardPage() -> Element {
    let store = use_session();

    let mut profile = use_resource(move || {
        let client = store.client();
        let admission_no = store.unique_id();
        async move { client.get_student(&admission_no).await }
    });

    let mut attendance = use_resource(move || {
        let client = store.client();
        let admission_no = store.unique_id();
        async move { client.fetch_attendance(&admission_no).await }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Student Dashboard" }

            div { class: "page-grid",
                Panel { title: "Profile",
                    match &*profile.read() {
                        None => rsx! { LoadingState {} },
                        Some(Err(err)) => rsx! {
                            ErrorState { message: err.friendly_message(), on_retry: move |_| profile.restart() }
                        },
                        Some(Ok(student)) => rsx! { DetailList { items: student_details(student) } },
                    }
                }

                Panel { title: "Attendance",
                    match &*attendance.read() {
                        None => rsx! { LoadingState { rows: 1 } },
                        Some(Err(err)) => rsx! {
                            ErrorState { message: err.friendly_message(), on_retry: move |_| attendance.restart() }
                        },
                        Some(Ok(map)) => {
                            let overall = summarize_records(map);
                            rsx! {
                                StatGrid {
                                    StatTile { label: "Attendance", value: format_percentage(overall.percentage()) }
                                    StatTile { label: "Present", value: overall.present.to_string() }
                                    StatTile { label: "Absent", value: overall.absent.to_string() }
                                }
                                Link { to: Route::StudentAttendance {}, "Open calendar" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Label/value rows for a student profile.
pub fn student_details(student: &Student) -> Vec<(String, String)> {
    let mut rows = vec![
        ("Admission no.".to_string(), student.admission_no.clone()),
        ("Name".to_string(), student.name.clone()),
        ("Class".to_string(), class_label(student)),
    ];
    if let Some(guardian) = &student.guardian_name {
        rows.push(("Guardian".to_string(), guardian.clone()));
    }
    if let Some(phone) = &student.phone {
        rows.push(("Phone".to_string(), phone.clone()));
    }
    rows
}

/// "10-A", or just "10" without a section.
pub fn class_label(student: &Student) -> String {
    if student.section.is_empty() {
        student.class_name.clone()
    } else {
        format!("{}-{}", student.class_name, student.section)
    }
}
