use dioxus::prelude::*;
use std::collections::HashMap;

/// Form wrapper that prevents the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Labelled text input with an optional validation message underneath.
#[component]
pub fn FormField(
    label: String,
    value: String,
    on_input: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "form-field", "data-invalid": if error.is_some() { "true" } else { "false" },
            label { class: "form-field-label", "{label}" }
            input {
                class: "form-field-input",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(message) = &error {
                span { class: "form-field-error", "{message}" }
            }
        }
    }
}

/// Labelled multi-line input.
#[component]
pub fn FormTextarea(
    label: String,
    value: String,
    on_input: EventHandler<FormEvent>,
    #[props(default = 4)] rows: u32,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        div { class: "form-field", "data-invalid": if error.is_some() { "true" } else { "false" },
            label { class: "form-field-label", "{label}" }
            textarea {
                class: "form-field-input",
                rows: "{rows}",
                value: value,
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(message) = &error {
                span { class: "form-field-error", "{message}" }
            }
        }
    }
}

/// Native select. Children should be `option { value: "...", "Label" }`.
#[component]
pub fn FormSelect(
    label: String,
    value: String,
    onchange: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "form-field-label", "{label}" }
            select {
                class: "form-field-input",
                value: value,
                onchange: move |evt| onchange.call(evt),
                {children}
            }
        }
    }
}

/// Look up the message for `field` in a validation error map.
pub fn field_error(errors: &HashMap<String, String>, field: &str) -> Option<String> {
    errors.get(field).cloned()
}
