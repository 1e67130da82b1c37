use dioxus::prelude::*;
use shared_types::{Audience, NewNotification, Notification, ALL_AUDIENCES};
use shared_ui::{
    Button, EmptyState, ErrorState, Form, FormField, FormSelect, FormTextarea, LoadingState,
    Notice, PageHeader, Panel,
};
use std::collections::HashMap;

use crate::format_helpers::format_datetime_human;
use crate::session::use_session;

/// Notification feed for one audience, optionally with a posting form.
#[component]
pub fn NotificationsPage(audience: Audience, can_post: bool) -> Element {
    let store = use_session();

    let mut data = use_resource(move || {
        let client = store.client();
        async move { client.list_notifications(audience).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Notifications",
                subtitle: Some(format!("Showing notices for {}", audience.display_name().to_lowercase())),
            }

            if can_post {
                PostNotificationForm { on_posted: move |_| data.restart() }
            }

            match &*data.read() {
                None => rsx! { LoadingState {} },
                Some(Err(err)) => rsx! {
                    ErrorState { message: err.friendly_message(), on_retry: move |_| data.restart() }
                },
                Some(Ok(items)) if items.is_empty() => rsx! {
                    EmptyState { message: "No notifications yet." }
                },
                Some(Ok(items)) => rsx! {
                    NotificationList { items: items.clone() }
                },
            }
        }
    }
}

#[component]
fn NotificationList(items: Vec<Notification>) -> Element {
    rsx! {
        ul { class: "notification-list",
            for item in items {
                li { key: "{item.id}", class: "notification-item",
                    h4 { class: "notification-title", "{item.title}" }
                    p { "{item.message}" }
                    span { class: "notification-meta",
                        "{item.audience.display_name()} | {item.posted_by} | {format_datetime_human(&item.posted_at)}"
                    }
                }
            }
        }
    }
}

#[component]
fn PostNotificationForm(on_posted: EventHandler<()>) -> Element {
    let store = use_session();
    let mut title = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut audience = use_signal(Audience::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<(bool, String)>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        saving.set(true);
        notice.set(None);
        field_errors.set(HashMap::new());

        let request = NewNotification {
            title: title.read().trim().to_string(),
            message: message.read().trim().to_string(),
            audience: audience(),
        };

        spawn(async move {
            match store.client().post_notification(&request).await {
                Ok(posted) => {
                    tracing::info!(id = posted.id, audience = posted.audience.as_str(), "Notification posted");
                    title.set(String::new());
                    message.set(String::new());
                    notice.set(Some((true, "Notification posted.".to_string())));
                    on_posted.call(());
                }
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => notice.set(Some((false, err.friendly_message()))),
            }
            saving.set(false);
        });
    };

    rsx! {
        Panel { title: "Post a notification",
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
                    label: "Message",
                    value: message(),
                    error: field_errors().get("message").cloned(),
                    on_input: move |e: FormEvent| message.set(e.value()),
                }
                FormSelect {
                    label: "Audience",
                    value: audience().as_str(),
                    onchange: move |e: FormEvent| audience.set(Audience::from_str_or_default(&e.value())),
                    for choice in ALL_AUDIENCES {
                        option { key: "{choice.as_str()}", value: choice.as_str(), "{choice.display_name()}" }
                    }
                }
                Button { button_type: "submit", loading: saving(), "Post" }
            }
        }
    }
}
