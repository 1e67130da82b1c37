use api::ApiClient;
use chrono::Local;
use dioxus::prelude::*;
use shared_types::{AppError, Assignment, AssignmentSubmission};
use shared_ui::{
    Button, DataTable, DataTableBody, DataTableCell, DataTableEmpty, DataTableHeader,
    DataTableRow, ErrorState, Form, FormSelect, FormTextarea, LoadingState, Notice, PageHeader,
    Panel,
};
use std::collections::HashMap;

use crate::format_helpers::format_date_human;
use crate::session::use_session;

/// Assignments for the signed-in student's class, with a submission form.
#[component]
pub fn StudentAssignmentsPage() -> Element {
    let store = use_session();

    let mut data = use_resource(move || {
        let client = store.client();
        let admission_no = store.unique_id();
        async move { load_class_assignments(&client, &admission_no).await }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Assignments" }

            match &*data.read() {
                None => rsx! { LoadingState {} },
                Some(Err(err)) => rsx! {
                    ErrorState { message: err.friendly_message(), on_retry: move |_| data.restart() }
                },
                Some(Ok(assignments)) => rsx! {
                    AssignmentTable { assignments: assignments.clone() }
                    if !assignments.is_empty() {
                        SubmitAssignmentForm { assignments: assignments.clone() }
                    }
                },
            }
        }
    }
}

/// Assignments for whichever class the student is enrolled in.
async fn load_class_assignments(
    client: &ApiClient,
    admission_no: &str,
) -> Result<Vec<Assignment>, AppError> {
    let student = client.get_student(admission_no).await?;
    client.list_assignments(Some(&student.class_name)).await
}

/// Read-only list of assignments with overdue highlighting.
#[component]
pub fn AssignmentTable(assignments: Vec<Assignment>) -> Element {
    let today = Local::now().date_naive();

    rsx! {
        DataTable {
            DataTableHeader { columns: vec!["Title", "Subject", "Class", "Due", "Posted by"] }
            DataTableBody {
                if assignments.is_empty() {
                    DataTableEmpty { colspan: 5, message: "No assignments posted yet." }
                }
                for assignment in assignments {
                    DataTableRow { key: "{assignment.id}",
                        DataTableCell {
                            strong { "{assignment.title}" }
                            if !assignment.description.is_empty() {
                                p { "{assignment.description}" }
                            }
                        }
                        DataTableCell { "{assignment.subject}" }
                        DataTableCell { "{assignment.class_name}" }
                        DataTableCell {
                            span {
                                class: "assignment-due",
                                "data-overdue": if assignment.is_overdue(today) { "true" } else { "false" },
                                "{format_date_human(assignment.due_date)}"
                            }
                        }
                        DataTableCell { "{assignment.posted_by}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SubmitAssignmentForm(assignments: Vec<Assignment>) -> Element {
    let store = use_session();
    let first_id = assignments.first().map(|a| a.id).unwrap_or_default();
    let mut selected = use_signal(move || first_id);
    let mut content = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        saving.set(true);
        notice.set(None);
        field_errors.set(HashMap::new());

        let assignment_id = selected();
        let submission = AssignmentSubmission {
            admission_no: store.unique_id(),
            content: content.read().trim().to_string(),
        };

        spawn(async move {
            match store.client().submit_assignment(assignment_id, &submission).await {
                Ok(response) => {
                    content.set(String::new());
                    notice.set(Some((true, response.message)));
                }
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => notice.set(Some((false, err.friendly_message()))),
            }
            saving.set(false);
        });
    };

    rsx! {
        Panel { title: "Submit work",
            if let Some((success, text)) = notice() {
                Notice { success, message: text }
            }
            Form { onsubmit: handle_submit,
                FormSelect {
                    label: "Assignment",
                    value: selected().to_string(),
                    onchange: move |e: FormEvent| {
                        if let Ok(id) = e.value().parse::<i64>() {
                            selected.set(id);
                        }
                    },
                    for assignment in assignments.iter() {
                        option { key: "{assignment.id}", value: "{assignment.id}", "{assignment.title}" }
                    }
                }
                FormTextarea {
                    label: "Your answer",
                    value: content(),
                    rows: 6,
                    error: field_errors().get("content").cloned(),
                    on_input: move |e: FormEvent| content.set(e.value()),
                }
                Button { button_type: "submit", loading: saving(), loading_label: "Submitting...", "Submit" }
            }
        }
    }
}
