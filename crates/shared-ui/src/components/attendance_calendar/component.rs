use chrono::Datelike;
use dioxus::prelude::*;
use shared_types::{classify_day, month_grid, AttendanceMap, MonthCursor, ALL_DAY_CLASSES};

/// Sunday-first column headers.
const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month view of one student's attendance with navigation and legend.
#[component]
pub fn AttendanceCalendar(
    cursor: MonthCursor,
    attendance: AttendanceMap,
    on_navigate: EventHandler<MonthCursor>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "attendance-calendar",
            div { class: "attendance-calendar-header",
                button {
                    class: "attendance-calendar-nav",
                    r#type: "button",
                    "aria-label": "Previous month",
                    onclick: move |_| on_navigate.call(cursor.prev()),
                    "\u{2039}"
                }
                span { class: "attendance-calendar-title", "{cursor.title()}" }
                button {
                    class: "attendance-calendar-nav",
                    r#type: "button",
                    "aria-label": "Next month",
                    onclick: move |_| on_navigate.call(cursor.next()),
                    "\u{203A}"
                }
            }
            AttendanceCalendarGrid { cursor, attendance }
            AttendanceLegend {}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AttendanceCalendarGridProps {
    pub cursor: MonthCursor,
    pub attendance: AttendanceMap,
}

/// The day grid alone. Each cell carries `attendance-day--<class>`.
#[component]
pub fn AttendanceCalendarGrid(props: AttendanceCalendarGridProps) -> Element {
    let cells = month_grid(props.cursor);

    rsx! {
        div { class: "attendance-calendar-grid", role: "grid",
            for label in WEEKDAY_LABELS {
                div { key: "{label}", class: "attendance-calendar-weekday", "{label}" }
            }
            for (index, cell) in cells.into_iter().enumerate() {
                match cell {
                    None => rsx! {
                        div { key: "blank-{index}", class: "attendance-day attendance-day--blank" }
                    },
                    Some(date) => {
                        let class = classify_day(date, &props.attendance);
                        rsx! {
                            div {
                                key: "{date}",
                                class: "attendance-day attendance-day--{class.css_class()}",
                                role: "gridcell",
                                title: "{date}: {class.label()}",
                                "data-date": "{date}",
                                "{date.day()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Color key for the four day classes.
#[component]
pub fn AttendanceLegend() -> Element {
    rsx! {
        ul { class: "attendance-legend",
            for class in ALL_DAY_CLASSES {
                li { key: "{class.css_class()}", class: "attendance-legend-item",
                    span { class: "attendance-legend-swatch attendance-day--{class.css_class()}" }
                    "{class.label()}"
                }
            }
        }
    }
}
