use dioxus::prelude::*;

/// Titled content section used by dashboards and forms.
#[component]
pub fn Panel(
    #[props(default)] title: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "panel", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if !title.is_empty() {
                h3 { class: "panel-title", "{title}" }
            }
            div { class: "panel-body", {children} }
        }
    }
}

/// A single labelled figure on a dashboard.
#[component]
pub fn StatTile(label: String, value: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-tile",
            span { class: "stat-tile-value", "{value}" }
            span { class: "stat-tile-label", "{label}" }
        }
    }
}

/// Responsive row of stat tiles.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}

/// Label/value pairs, e.g. a profile.
#[component]
pub fn DetailList(items: Vec<(String, String)>) -> Element {
    rsx! {
        dl { class: "detail-list",
            for (label, value) in items {
                div { key: "{label}", class: "detail-list-row",
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }
    }
}
