use dioxus::prelude::*;
use shared_ui::{Button, DetailList, EmptyState, ErrorState, FormField, LoadingState, PageHeader, Panel};

use crate::format_helpers::non_blank;
use crate::routes::student::attendance::AttendanceOverview;
use crate::routes::student::dashboard::student_details;
use crate::session::use_session;

/// Look up any student's attendance calendar by admission number.
#[component]
pub fn AttendanceLookupPage() -> Element {
    let mut input = use_signal(String::new);
    let mut selected = use_signal(|| Option::<String>::None);

    rsx! {
        div { class: "container",
            PageHeader { title: "Attendance", subtitle: Some("Look up a student by admission number".to_string()) }

            div { class: "toolbar",
                FormField {
                    label: "Admission number",
                    value: input(),
                    placeholder: "e.g. ADM-2024-017",
                    on_input: move |e: FormEvent| input.set(e.value()),
                }
                Button {
                    onclick: move |_| selected.set(non_blank(&input.read())),
                    "View"
                }
            }

            match selected() {
                None => rsx! { EmptyState { message: "Enter an admission number to view attendance." } },
                Some(admission_no) => rsx! {
                    StudentBanner { key: "banner-{admission_no}", admission_no: admission_no.clone() }
                    AttendanceOverview { key: "{admission_no}", admission_no: admission_no.clone() }
                },
            }
        }
    }
}

#[component]
fn StudentBanner(admission_no: String) -> Element {
    let store = use_session();

    let mut profile = use_resource(move || {
        let client = store.client();
        let admission_no = admission_no.clone();
        async move { client.get_student(&admission_no).await }
    });

    let view = match &*profile.read() {
        None => rsx! { LoadingState { rows: 1 } },
        Some(Err(err)) => rsx! {
            ErrorState { message: err.friendly_message(), on_retry: move |_| profile.restart() }
        },
        Some(Ok(student)) => rsx! {
            Panel { title: student.name.clone(),
                DetailList { items: student_details(student) }
            }
        },
    };
    view
}
