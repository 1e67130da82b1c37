use dioxus::prelude::*;

use super::Route;

/// 404 page for paths outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "terminal-page",
            div { class: "terminal-card",
                div { class: "terminal-code", "404" }
                h1 { class: "terminal-title", "Page Not Found" }
                p { class: "terminal-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: Route::Home {}, "Back to home" }
            }
        }
    }
}
