use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{ErrorState, LoadingState, PageHeader, StatGrid, StatTile};

use crate::session::use_session;

/// School-wide counts for the admin and principal dashboards.
#[component]
pub fn SummaryDashboardPage(role: Role) -> Element {
    let store = use_session();

    let mut summary = use_resource(move || {
        let client = store.client();
        async move { client.dashboard_summary().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: format!("{} Dashboard", role.display_name()),
                subtitle: Some(format!("Signed in as {}", store.unique_id())),
            }

            match &*summary.read() {
                None => rsx! { LoadingState { rows: 1 } },
                Some(Err(err)) => rsx! {
                    ErrorState { message: err.friendly_message(), on_retry: move |_| summary.restart() }
                },
                Some(Ok(counts)) => rsx! {
                    StatGrid {
                        StatTile { label: "Students", value: counts.total_students.to_string() }
                        StatTile { label: "Teachers", value: counts.total_teachers.to_string() }
                        StatTile { label: "Classes", value: counts.total_classes.to_string() }
                        StatTile { label: "Notifications", value: counts.total_notifications.to_string() }
                    }
                },
            }
        }
    }
}
