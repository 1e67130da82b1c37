use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{AppError, Student};
use shared_ui::{EmptyState, ErrorState, LoadingState, PageHeader};

use crate::routes::directory::StudentTable;
use crate::session::use_session;

/// Students in the signed-in teacher's class.
#[component]
pub fn ClassRosterPage() -> Element {
    let store = use_session();

    let mut data = use_resource(move || {
        let client = store.client();
        let teacher_id = store.unique_id();
        async move { load_roster(&client, &teacher_id).await }
    });

    rsx! {
        div { class: "container",
            match &*data.read() {
                None => rsx! {
                    PageHeader { title: "My Class" }
                    LoadingState {}
                },
                Some(Err(err)) => rsx! {
                    PageHeader { title: "My Class" }
                    ErrorState { message: err.friendly_message(), on_retry: move |_| data.restart() }
                },
                Some(Ok(None)) => rsx! {
                    PageHeader { title: "My Class" }
                    EmptyState { message: "You are not assigned to a class." }
                },
                Some(Ok(Some((class_name, students)))) => rsx! {
                    PageHeader {
                        title: "My Class",
                        subtitle: Some(format!("Class {class_name}, {} students", students.len())),
                    }
                    StudentTable { students: students.clone() }
                },
            }
        }
    }
}

/// The teacher's class name and its students, or `None` without a class.
pub async fn load_roster(
    client: &ApiClient,
    teacher_id: &str,
) -> Result<Option<(String, Vec<Student>)>, AppError> {
    let teacher = client.get_teacher(teacher_id).await?;
    match teacher.class_name {
        Some(class_name) => {
            let students = client.list_students(Some(&class_name)).await?;
            Ok(Some((class_name, students)))
        }
        None => Ok(None),
    }
}
