use dioxus::prelude::*;
use shared_types::navigation::{navigate, Navigation};
use shared_types::{LoginRequest, Role, StoredSession, ALL_ROLES};
use shared_ui::{Button, Form, FormField, FormSelect, Notice};
use std::collections::HashMap;

use super::redirect_route;
use crate::config::app_config;
use crate::session::use_session;

/// Sign-in page: unique id, password and role.
///
/// Arriving here ends any existing session. On success the session is
/// stored and the user lands on their role's home page.
#[component]
pub fn Login() -> Element {
    let mut store = use_session();
    let mut unique_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    use_effect(move || store.sign_out());

    let handle_login = move |_: FormEvent| {
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = LoginRequest {
            unique_id: unique_id.read().trim().to_string(),
            password: password.read().clone(),
            role: role(),
        };

        spawn(async move {
            match store.client().login(&request).await {
                Ok(response) => {
                    let status = store.sign_in(StoredSession::from(response));
                    if let Navigation::Redirect(target) =
                        navigate("/", &status, app_config().routing.policy())
                    {
                        navigator().push(redirect_route(target));
                    }
                }
                Err(err) if !err.field_errors.is_empty() => {
                    field_errors.set(err.field_errors);
                    loading.set(false);
                }
                Err(err) => {
                    tracing::warn!(kind = %err.kind, "Sign in failed");
                    error_msg.set(Some(err.friendly_message()));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Campus Sync" }
                p { class: "auth-description", "Sign in to your school portal" }

                if let Some(err) = error_msg() {
                    Notice { success: false, message: err }
                }

                Form { onsubmit: handle_login,
                    FormSelect {
                        label: "I am a",
                        value: role().as_str(),
                        onchange: move |e: FormEvent| {
                            if let Some(selected) = Role::parse(&e.value()) {
                                role.set(selected);
                            }
                        },
                        for choice in ALL_ROLES {
                            option { key: "{choice.as_str()}", value: choice.as_str(), "{choice.display_name()}" }
                        }
                    }
                    FormField {
                        label: "Unique ID",
                        value: unique_id(),
                        placeholder: "Admission number or staff ID",
                        error: field_errors().get("unique_id").cloned(),
                        on_input: move |e: FormEvent| unique_id.set(e.value()),
                    }
                    FormField {
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        error: field_errors().get("password").cloned(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    Button {
                        button_type: "submit",
                        loading: loading(),
                        loading_label: "Signing in...",
                        "Sign In"
                    }
                }
            }
        }
    }
}
