use dioxus::prelude::*;
use shared_types::{NewTeacher, Teacher};
use shared_ui::{
    Button, DataTable, DataTableBody, DataTableCell, DataTableEmpty, DataTableHeader,
    DataTableRow, ErrorState, Form, FormField, LoadingState, Notice, PageHeader, Panel,
};
use std::collections::HashMap;

use crate::format_helpers::non_blank;
use crate::session::use_session;

/// Staff directory. Admins also get a form to add teachers.
#[component]
pub fn TeacherDirectoryPage(can_create: bool) -> Element {
    let store = use_session();

    let mut data = use_resource(move || {
        let client = store.client();
        async move { client.list_teachers().await }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Teachers" }

            match &*data.read() {
                None => rsx! { LoadingState {} },
                Some(Err(err)) => rsx! {
                    ErrorState { message: err.friendly_message(), on_retry: move |_| data.restart() }
                },
                Some(Ok(teachers)) => rsx! { TeacherTable { teachers: teachers.clone() } },
            }

            if can_create {
                CreateTeacherForm { on_created: move |_| data.restart() }
            }
        }
    }
}

#[component]
fn TeacherTable(teachers: Vec<Teacher>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader { columns: vec!["ID", "Name", "Subject", "Class", "Email"] }
            DataTableBody {
                if teachers.is_empty() {
                    DataTableEmpty { colspan: 5, message: "No teachers found." }
                }
                for teacher in teachers {
                    DataTableRow { key: "{teacher.teacher_id}",
                        DataTableCell { "{teacher.teacher_id}" }
                        DataTableCell { "{teacher.name}" }
                        DataTableCell { "{teacher.subject}" }
                        DataTableCell { {teacher.class_name.clone().unwrap_or_default()} }
                        DataTableCell { {teacher.email.clone().unwrap_or_default()} }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateTeacherForm(on_created: EventHandler<()>) -> Element {
    let store = use_session();
    let mut teacher_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut class_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        saving.set(true);
        notice.set(None);
        field_errors.set(HashMap::new());

        let request = NewTeacher {
            teacher_id: teacher_id.read().trim().to_string(),
            name: name.read().trim().to_string(),
            subject: subject.read().trim().to_string(),
            class_name: non_blank(&class_name.read()),
            email: non_blank(&email.read()),
            phone: non_blank(&phone.read()),
        };

        spawn(async move {
            match store.client().create_teacher(&request).await {
                Ok(teacher) => {
                    tracing::info!(teacher_id = %teacher.teacher_id, "Teacher added");
                    for mut field in [teacher_id, name, subject, class_name, email, phone] {
                        field.set(String::new());
                    }
                    notice.set(Some((true, format!("Added {}.", teacher.name))));
                    on_created.call(());
                }
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => notice.set(Some((false, err.friendly_message()))),
            }
            saving.set(false);
        });
    };

    rsx! {
        Panel { title: "Add a teacher",
            if let Some((success, text)) = notice() {
                Notice { success, message: text }
            }
            Form { onsubmit: handle_submit,
                FormField {
                    label: "Teacher ID",
                    value: teacher_id(),
                    error: field_errors().get("teacher_id").cloned(),
                    on_input: move |e: FormEvent| teacher_id.set(e.value()),
                }
                FormField {
                    label: "Full name",
                    value: name(),
                    error: field_errors().get("name").cloned(),
                    on_input: move |e: FormEvent| name.set(e.value()),
                }
                FormField {
                    label: "Subject",
                    value: subject(),
                    error: field_errors().get("subject").cloned(),
                    on_input: move |e: FormEvent| subject.set(e.value()),
                }
                FormField {
                    label: "Class teacher of",
                    value: class_name(),
                    placeholder: "Optional",
                    on_input: move |e: FormEvent| class_name.set(e.value()),
                }
                FormField {
                    label: "Email",
                    input_type: "email",
                    value: email(),
                    error: field_errors().get("email").cloned(),
                    on_input: move |e: FormEvent| email.set(e.value()),
                }
                FormField {
                    label: "Phone",
                    input_type: "tel",
                    value: phone(),
                    on_input: move |e: FormEvent| phone.set(e.value()),
                }
                Button { button_type: "submit", loading: saving(), "Add teacher" }
            }
        }
    }
}
