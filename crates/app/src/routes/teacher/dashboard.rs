use dioxus::prelude::*;
use shared_types::Teacher;
use shared_ui::{Button, DetailList, ErrorState, LoadingState, PageHeader, Panel};

use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn TeacherDashboardPage() -> Element {
    let store = use_session();

    let mut profile = use_resource(move || {
        let client = store.client();
        let teacher_id = store.unique_id();
        async move { client.get_teacher(&teacher_id).await }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Teacher Dashboard" }

            match &*profile.read() {
                None => rsx! { LoadingState {} },
                Some(Err(err)) => rsx! {
                    ErrorState { message: err.friendly_message(), on_retry: move |_| profile.restart() }
                },
                Some(Ok(teacher)) => rsx! {
                    div { class: "page-grid",
                        Panel { title: "Profile",
                            DetailList { items: teacher_details(teacher) }
                        }
                        Panel { title: "Today",
                            div { class: "toolbar",
                                Button {
                                    onclick: move |_| { navigator().push(Route::TeacherAttendance {}); },
                                    "Mark attendance"
                                }
                                Button {
                                    variant: shared_ui::ButtonVariant::Secondary,
                                    onclick: move |_| { navigator().push(Route::TeacherAssignments {}); },
                                    "Post assignment"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

fn teacher_details(teacher: &Teacher) -> Vec<(String, String)> {
    let mut rows = vec![
        ("Teacher ID".to_string(), teacher.teacher_id.clone()),
        ("Name".to_string(), teacher.name.clone()),
        ("Subject".to_string(), teacher.subject.clone()),
        (
            "Class".to_string(),
            teacher.class_name.clone().unwrap_or_else(|| "Not assigned".to_string()),
        ),
    ];
    if let Some(email) = &teacher.email {
        rows.push(("Email".to_string(), email.clone()));
    }
    rows
}
