use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdCalendar, LdLayoutDashboard, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::navigation::{resolve, routes_for, Page, Resolution, Shell};
use shared_ui::{
    Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarTrigger,
};

use super::{route_for_page, Route};
use crate::config::app_config;
use crate::session::use_session;

#[component]
pub fn StudentShell() -> Element {
    rsx! { ShellLayout { shell: Shell::Student } }
}

#[component]
pub fn TeacherShell() -> Element {
    rsx! { ShellLayout { shell: Shell::Teacher } }
}

#[component]
pub fn AdminShell() -> Element {
    rsx! { ShellLayout { shell: Shell::Admin } }
}

#[component]
pub fn PrincipalShell() -> Element {
    rsx! { ShellLayout { shell: Shell::Principal } }
}

/// Page shell: shared header, the shell's sidebar, and the routed content.
///
/// The sidebar is picked by `shell`, which the router derives from the URL
/// prefix. Each shell instance owns its own sidebar state.
#[component]
fn ShellLayout(shell: Shell) -> Element {
    let route: Route = use_route();
    let path = route.to_string();
    let title = match resolve(&path) {
        Resolution::Shell(entry) => entry.title,
        _ => "",
    };
    let breakpoint = app_config().layout.mobile_breakpoint;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        SidebarProvider { breakpoint,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-mark", "CS" }
                        span { class: "sidebar-brand-name", "Campus Sync" }
                    }
                }

                SidebarContent {
                    SidebarMenu {
                        for entry in routes_for(shell) {
                            SidebarMenuItem { key: "{entry.path}",
                                Link { to: route_for_page(entry.page),
                                    SidebarMenuButton { active: entry.path == path,
                                        PageIcon { page: entry.page }
                                        span { class: "sidebar-menu-label", "{entry.title}" }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    span { class: "sidebar-menu-label", "{shell.role().display_name()} portal" }
                }
            }

            SidebarInset {
                Header { title: title.to_string() }
                div { class: "page-content", Outlet::<Route> {} }
            }
        }
    }
}

/// Top bar shared by every shell. Knows nothing about the role.
#[component]
fn Header(title: String) -> Element {
    let mut store = use_session();
    let user = store.unique_id();

    rsx! {
        header { class: "app-header",
            SidebarTrigger {
                span { class: "app-header-trigger-icon", "\u{2630}" }
            }
            span { class: "app-header-title", "{title}" }
            div { class: "app-header-spacer" }
            if !user.is_empty() {
                span { class: "app-header-user", "{user}" }
            }
            button {
                class: "app-header-signout",
                r#type: "button",
                onclick: move |_| {
                    tracing::info!("Signed out");
                    store.sign_out();
                    navigator().push(Route::Login {});
                },
                "Sign Out"
            }
        }
    }
}

#[component]
fn PageIcon(page: Page) -> Element {
    match page {
        Page::StudentDashboard
        | Page::TeacherDashboard
        | Page::AdminDashboard
        | Page::PrincipalDashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        Page::StudentAttendance
        | Page::TeacherAttendance
        | Page::AdminAttendance
        | Page::PrincipalAttendance => rsx! {
            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
        },
        Page::StudentAssignments | Page::TeacherAssignments => rsx! {
            Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
        },
        Page::StudentNotifications
        | Page::TeacherNotifications
        | Page::AdminNotifications
        | Page::PrincipalNotifications => rsx! {
            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
        },
        Page::TeacherStudents | Page::AdminStudents | Page::PrincipalStudents => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
        Page::AdminTeachers | Page::PrincipalTeachers => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
    }
}
