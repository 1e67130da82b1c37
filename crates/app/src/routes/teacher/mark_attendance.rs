use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use shared_types::{AppError, AttendanceEntry, AttendanceSheet, AttendanceStatus, Student};
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableEmpty,
    DataTableHeader, DataTableRow, EmptyState, ErrorState, Form, FormField, LoadingState, Notice,
    PageHeader, Panel,
};
use std::collections::HashMap;

use super::roster::load_roster;
use crate::session::use_session;

#[component]
pub fn MarkAttendancePage() -> Element {
    let store = use_session();

    let mut roster = use_resource(move || {
        let client = store.client();
        let teacher_id = store.unique_id();
        async move { load_roster(&client, &teacher_id).await }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Mark Attendance" }

            match &*roster.read() {
                None => rsx! { LoadingState {} },
                Some(Err(err)) => rsx! {
                    ErrorState { message: err.friendly_message(), on_retry: move |_| roster.restart() }
                },
                Some(Ok(None)) => rsx! {
                    EmptyState { message: "You are not assigned to a class." }
                },
                Some(Ok(Some((class_name, students)))) => rsx! {
                    AttendanceSheetForm { class_name: class_name.clone(), students: students.clone() }
                },
            }
        }
    }
}

#[component]
fn AttendanceSheetForm(class_name: String, students: Vec<Student>) -> Element {
    let store = use_session();
    let mut date = use_signal(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    let mut marks = use_signal(HashMap::<String, AttendanceStatus>::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);
    let mut saving = use_signal(|| false);

    let class_for_submit = class_name.clone();
    let students_for_submit = students.clone();
    let handle_submit = move |_: FormEvent| {
        notice.set(None);
        field_errors.set(HashMap::new());

        let sheet = match build_sheet(&date.read(), &class_for_submit, &students_for_submit, &marks.read()) {
            Ok(sheet) => sheet,
            Err(err) => {
                field_errors.set(err.field_errors);
                return;
            }
        };

        saving.set(true);
        spawn(async move {
            match store.client().mark_attendance(&sheet).await {
                Ok(response) => notice.set(Some((true, response.message))),
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => notice.set(Some((false, err.friendly_message()))),
            }
            saving.set(false);
        });
    };

    rsx! {
        Panel { title: format!("Class {class_name}"),
            if let Some((success, text)) = notice() {
                Notice { success, message: text }
            }
            Form { onsubmit: handle_submit,
                div { class: "toolbar",
                    FormField {
                        label: "Date",
                        input_type: "date",
                        value: date(),
                        error: field_errors().get("date").cloned(),
                        on_input: move |e: FormEvent| date.set(e.value()),
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| marks.write().clear(),
                        "Mark all present"
                    }
                }

                DataTable {
                    DataTableHeader { columns: vec!["Admission No", "Name", "Status"] }
                    DataTableBody {
                        if students.is_empty() {
                            DataTableEmpty { colspan: 3, message: "No students in this class." }
                        }
                        for student in students.iter() {
                            AttendanceRow {
                                key: "{student.admission_no}",
                                student: student.clone(),
                                status: status_of(&marks.read(), &student.admission_no),
                                on_change: move |(admission_no, status): (String, AttendanceStatus)| {
                                    marks.write().insert(admission_no, status);
                                },
                            }
                        }
                    }
                }

                if let Some(err) = field_errors().get("entries") {
                    Notice { success: false, message: err.clone() }
                }

                Button { button_type: "submit", loading: saving(), "Save attendance" }
            }
        }
    }
}

#[component]
fn AttendanceRow(
    student: Student,
    status: AttendanceStatus,
    on_change: EventHandler<(String, AttendanceStatus)>,
) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell { "{student.admission_no}" }
            DataTableCell { "{student.name}" }
            DataTableCell {
                div { class: "attendance-toggle",
                    for choice in [AttendanceStatus::Present, AttendanceStatus::Absent] {
                        button {
                            key: "{choice.as_str()}",
                            r#type: "button",
                            "data-status": choice.as_str(),
                            "data-selected": if choice == status { "true" } else { "false" },
                            onclick: {
                                let admission_no = student.admission_no.clone();
                                move |_| on_change.call((admission_no.clone(), choice))
                            },
                            if choice == AttendanceStatus::Present { "Present" } else { "Absent" }
                        }
                    }
                }
            }
        }
    }
}

/// Students without an explicit mark count as present.
fn status_of(marks: &HashMap<String, AttendanceStatus>, admission_no: &str) -> AttendanceStatus {
    marks
        .get(admission_no)
        .copied()
        .unwrap_or(AttendanceStatus::Present)
}

/// Assemble the sheet for submission. Rejects a date that is not `YYYY-MM-DD`.
pub fn build_sheet(
    date: &str,
    class_name: &str,
    students: &[Student],
    marks: &HashMap<String, AttendanceStatus>,
) -> Result<AttendanceSheet, AppError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        let mut fields = HashMap::new();
        fields.insert("date".to_string(), "Pick a valid date".to_string());
        AppError::validation("Invalid attendance date", fields)
    })?;

    let entries = students
        .iter()
        .map(|student| AttendanceEntry {
            admission_no: student.admission_no.clone(),
            status: status_of(marks, &student.admission_no),
        })
        .collect();

    Ok(AttendanceSheet {
        date,
        class_name: class_name.to_string(),
        entries,
    })
}
