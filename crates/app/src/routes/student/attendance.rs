use chrono::Local;
use dioxus::prelude::*;
use shared_types::{build_month, summarize, summarize_records, MonthCursor};
use shared_ui::{
    AttendanceCalendar, DetailList, ErrorState, LoadingState, PageHeader, Panel, StatGrid,
    StatTile,
};

use crate::format_helpers::format_percentage;
use crate::session::use_session;

#[component]
pub fn StudentAttendancePage() -> Element {
    let store = use_session();
    let admission_no = store.unique_id();

    rsx! {
        div { class: "container",
            PageHeader { title: "My Attendance", subtitle: Some(format!("Admission no. {admission_no}")) }
            AttendanceOverview { key: "{admission_no}", admission_no: admission_no.clone() }
        }
    }
}

/// Calendar and counts for one student.
///
/// A failed fetch shows only the error panel; the calendar is not drawn from
/// stale or partial data. Key this by admission number so a new student
/// triggers a fresh fetch.
#[component]
pub fn AttendanceOverview(admission_no: String) -> Element {
    let store = use_session();
    let mut cursor = use_signal(|| MonthCursor::containing(Local::now().date_naive()));

    let mut attendance = use_resource(move || {
        let client = store.client();
        let admission_no = admission_no.clone();
        async move { client.fetch_attendance(&admission_no).await }
    });

    let view = match &*attendance.read() {
        None => rsx! { LoadingState {} },
        Some(Err(err)) => rsx! {
            ErrorState { message: err.friendly_message(), on_retry: move |_| attendance.restart() }
        },
        Some(Ok(map)) => {
            let month = build_month(cursor(), map);
            let this_month = summarize(&month);
            let overall = summarize_records(map);
            let details = vec![
                ("Overall attendance".to_string(), format_percentage(overall.percentage())),
                ("Days present".to_string(), overall.present.to_string()),
                ("Days absent".to_string(), overall.absent.to_string()),
            ];

            rsx! {
                div { class: "page-grid",
                    Panel { title: "Calendar",
                        AttendanceCalendar {
                            cursor: cursor(),
                            attendance: map.clone(),
                            on_navigate: move |next| cursor.set(next),
                        }
                    }
                    Panel { title: cursor().title(),
                        StatGrid {
                            StatTile { label: "Present", value: this_month.present.to_string() }
                            StatTile { label: "Absent", value: this_month.absent.to_string() }
                            StatTile { label: "Sundays", value: this_month.weekend.to_string() }
                            StatTile { label: "Not uploaded", value: this_month.not_uploaded.to_string() }
                        }
                        DetailList { items: details }
                    }
                }
            }
        }
    };
    view
}
