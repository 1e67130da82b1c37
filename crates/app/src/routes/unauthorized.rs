use dioxus::prelude::*;

use super::Route;
use crate::session::use_session;

/// Shown when the session cannot use the requested page.
#[component]
pub fn Unauthorized() -> Element {
    let store = use_session();
    let signed_in = store.session().is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "terminal-page",
            div { class: "terminal-card",
                div { class: "terminal-code", "403" }
                h1 { class: "terminal-title", "Not Authorized" }
                p { class: "terminal-message",
                    "Your account does not have access to this page."
                }
                if signed_in {
                    Link { to: Route::Home {}, "Back to my dashboard" }
                } else {
                    Link { to: Route::Login {}, "Sign in with another account" }
                }
            }
        }
    }
}
