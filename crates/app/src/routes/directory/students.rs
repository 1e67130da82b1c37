use dioxus::prelude::*;
use shared_types::{NewStudent, Student};
use shared_ui::{
    Button, DataTable, DataTableBody, DataTableCell, DataTableEmpty, DataTableHeader,
    DataTableRow, ErrorState, Form, FormField, LoadingState, Notice, PageHeader, Panel,
};
use std::collections::HashMap;

use crate::format_helpers::non_blank;
use crate::routes::student::dashboard::class_label;
use crate::session::use_session;

/// Student directory with a class filter. Admins also get an enrolment form.
#[component]
pub fn StudentDirectoryPage(can_create: bool) -> Element {
    let store = use_session();
    let mut filter_input = use_signal(String::new);
    let mut class_filter = use_signal(|| Option::<String>::None);

    let mut data = use_resource(move || {
        let client = store.client();
        let class_name = class_filter.read().clone();
        async move { client.list_students(class_name.as_deref()).await }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Students" }

            div { class: "toolbar",
                FormField {
                    label: "Class",
                    value: filter_input(),
                    placeholder: "All classes",
                    on_input: move |e: FormEvent| filter_input.set(e.value()),
                }
                Button {
                    onclick: move |_| class_filter.set(non_blank(&filter_input.read())),
                    "Filter"
                }
            }

            match &*data.read() {
                None => rsx! { LoadingState {} },
                Some(Err(err)) => rsx! {
                    ErrorState { message: err.friendly_message(), on_retry: move |_| data.restart() }
                },
                Some(Ok(students)) => rsx! { StudentTable { students: students.clone() } },
            }

            if can_create {
                CreateStudentForm { on_created: move |_| data.restart() }
            }
        }
    }
}

#[component]
pub fn StudentTable(students: Vec<Student>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader { columns: vec!["Admission No", "Name", "Class", "Guardian", "Phone"] }
            DataTableBody {
                if students.is_empty() {
                    DataTableEmpty { colspan: 5, message: "No students found." }
                }
                for student in students {
                    DataTableRow { key: "{student.admission_no}",
                        DataTableCell { "{student.admission_no}" }
                        DataTableCell { "{student.name}" }
                        DataTableCell { "{class_label(&student)}" }
                        DataTableCell { {student.guardian_name.clone().unwrap_or_default()} }
                        DataTableCell { {student.phone.clone().unwrap_or_default()} }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateStudentForm(on_created: EventHandler<()>) -> Element {
    let store = use_session();
    let mut admission_no = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut class_name = use_signal(String::new);
    let mut section = use_signal(String::new);
    let mut guardian = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        saving.set(true);
        notice.set(None);
        field_errors.set(HashMap::new());

        let request = NewStudent {
            admission_no: admission_no.read().trim().to_string(),
            name: name.read().trim().to_string(),
            class_name: class_name.read().trim().to_string(),
            section: section.read().trim().to_string(),
            guardian_name: non_blank(&guardian.read()),
            phone: non_blank(&phone.read()),
        };

        spawn(async move {
            match store.client().create_student(&request).await {
                Ok(student) => {
                    tracing::info!(admission_no = %student.admission_no, "Student enrolled");
                    for mut field in [admission_no, name, class_name, section, guardian, phone] {
                        field.set(String::new());
                    }
                    notice.set(Some((true, format!("Enrolled {}.", student.name))));
                    on_created.call(());
                }
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => notice.set(Some((false, err.friendly_message()))),
            }
            saving.set(false);
        });
    };

    rsx! {
        Panel { title: "Enrol a student",
            if let Some((success, text)) = notice() {
                Notice { success, message: text }
            }
            Form { onsubmit: handle_submit,
                FormField {
                    label: "Admission number",
                    value: admission_no(),
                    error: field_errors().get("admission_no").cloned(),
                    on_input: move |e: FormEvent| admission_no.set(e.value()),
                }
                FormField {
                    label: "Full name",
                    value: name(),
                    error: field_errors().get("name").cloned(),
                    on_input: move |e: FormEvent| name.set(e.value()),
                }
                FormField {
                    label: "Class",
                    value: class_name(),
                    error: field_errors().get("class_name").cloned(),
                    on_input: move |e: FormEvent| class_name.set(e.value()),
                }
                FormField {
                    label: "Section",
                    value: section(),
                    on_input: move |e: FormEvent| section.set(e.value()),
                }
                FormField {
                    label: "Guardian",
                    value: guardian(),
                    on_input: move |e: FormEvent| guardian.set(e.value()),
                }
                FormField {
                    label: "Phone",
                    input_type: "tel",
                    value: phone(),
                    on_input: move |e: FormEvent| phone.set(e.value()),
                }
                Button { button_type: "submit", loading: saving(), "Enrol" }
            }
        }
    }
}
