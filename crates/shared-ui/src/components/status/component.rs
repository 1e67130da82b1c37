use dioxus::prelude::*;

/// Number of placeholder bars shown while a fetch is in flight.
const DEFAULT_SKELETON_ROWS: usize = 3;

/// Pulsing placeholder rows for an in-flight fetch.
#[component]
pub fn LoadingState(#[props(default = DEFAULT_SKELETON_ROWS)] rows: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "status-loading", "aria-busy": "true",
            for i in 0..rows {
                div { key: "{i}", class: "status-skeleton" }
            }
        }
    }
}

/// Page-level error panel. The retry button only appears with `on_retry`.
#[component]
pub fn ErrorState(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "status-error", role: "alert",
            p { class: "status-error-text", "{message}" }
            if let Some(handler) = on_retry {
                button {
                    class: "status-retry",
                    r#type: "button",
                    onclick: move |evt| handler.call(evt),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        p { class: "status-empty", "{message}" }
    }
}

/// Inline banner for form results.
#[component]
pub fn Notice(#[props(default = true)] success: bool, message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "status-notice",
            "data-kind": if success { "success" } else { "error" },
            "{message}"
        }
    }
}
