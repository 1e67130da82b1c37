use api::ApiClient;
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use shared_types::{AppError, Assignment, NewAssignment, Teacher};
use shared_ui::{
    Button, ErrorState, Form, FormField, FormTextarea, LoadingState, Notice, PageHeader, Panel,
};
use std::collections::HashMap;

use crate::routes::student::assignments::AssignmentTable;
use crate::session::use_session;

/// Post assignments and review those already posted for the teacher's class.
#[component]
pub fn TeacherAssignmentsPage() -> Element {
    let store = use_session();

    let mut data = use_resource(move || {
        let client = store.client();
        let teacher_id = store.unique_id();
        async move { load_teacher_assignments(&client, &teacher_id).await }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Assignments" }

            match &*data.read() {
                None => rsx! { LoadingState {} },
                Some(Err(err)) => rsx! {
                    ErrorState { message: err.friendly_message(), on_retry: move |_| data.restart() }
                },
                Some(Ok((teacher, assignments))) => rsx! {
                    PostAssignmentForm { teacher: teacher.clone(), on_posted: move |_| data.restart() }
                    AssignmentTable { assignments: assignments.clone() }
                },
            }
        }
    }
}

async fn load_teacher_assignments(
    client: &ApiClient,
    teacher_id: &str,
) -> Result<(Teacher, Vec<Assignment>), AppError> {
    let teacher = client.get_teacher(teacher_id).await?;
    let assignments = client.list_assignments(teacher.class_name.as_deref()).await?;
    Ok((teacher, assignments))
}

#[component]
fn PostAssignmentForm(teacher: Teacher, on_posted: EventHandler<()>) -> Element {
    let store = use_session();
    let default_class = teacher.class_name.clone().unwrap_or_default();
    let default_subject = teacher.subject.clone();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut class_name = use_signal(move || default_class);
    let mut subject = use_signal(move || default_subject);
    let mut due_date = use_signal(|| {
        (Local::now().date_naive() + chrono::Duration::days(7))
            .format("%Y-%m-%d")
            .to_string()
    });
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        notice.set(None);
        field_errors.set(HashMap::new());

        let Ok(due) = NaiveDate::parse_from_str(due_date.read().trim(), "%Y-%m-%d") else {
            let mut fields = HashMap::new();
            fields.insert("due_date".to_string(), "Pick a valid due date".to_string());
            field_errors.set(fields);
            return;
        };

        let request = NewAssignment {
            title: title.read().trim().to_string(),
            description: description.read().trim().to_string(),
            class_name: class_name.read().trim().to_string(),
            subject: subject.read().trim().to_string(),
            due_date: due,
        };

        saving.set(true);
        spawn(async move {
            match store.client().post_assignment(&request).await {
                Ok(posted) => {
                    tracing::info!(id = posted.id, class_name = %posted.class_name, "Assignment posted");
                    title.set(String::new());
                    description.set(String::new());
                    notice.set(Some((true, format!("Posted \"{}\".", posted.title))));
                    on_posted.call(());
                }
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => notice.set(Some((false, err.friendly_message()))),
            }
            saving.set(false);
        });
    };

    rsx! {
        Panel { title: "Post an assignment",
            if let Some((success, text)) = notice() {
                Notice { success, message: text }
            }
            Form { onsubmit: handle_submit,
                FormField {
                    label: "Title",
                    value: title(),
                    error: field_errors().get("title").cloned(),
                    on_input: move |e: FormEvent| title.set(e.value()),
                }
                FormTextarea {
                    label: "Description",
                    value: description(),
                    on_input: move |e: FormEvent| description.set(e.value()),
                }
                div { class: "toolbar",
                    FormField {
                        label: "Class",
                        value: class_name(),
                        error: field_errors().get("class_name").cloned(),
                        on_input: move |e: FormEvent| class_name.set(e.value()),
                    }
                    FormField {
                        label: "Subject",
                        value: subject(),
                        error: field_errors().get("subject").cloned(),
                        on_input: move |e: FormEvent| subject.set(e.value()),
                    }
                    FormField {
                        label: "Due date",
                        input_type: "date",
                        value: due_date(),
                        error: field_errors().get("due_date").cloned(),
                        on_input: move |e: FormEvent| due_date.set(e.value()),
                    }
                }
                Button { button_type: "submit", loading: saving(), "Post assignment" }
            }
        }
    }
}
