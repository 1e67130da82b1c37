pub mod attendance_lookup;
pub mod directory;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod shell;
pub mod student;
pub mod summary;
pub mod teacher;
pub mod unauthorized;

use dioxus::prelude::*;
use shared_types::navigation::{navigate, Navigation, Page, Redirect};
use shared_types::{Audience, Role};

use crate::config::app_config;
use crate::session::use_session;
use attendance_lookup::AttendanceLookupPage;
use directory::{StudentDirectoryPage, TeacherDirectoryPage};
use login::Login;
use not_found::NotFound;
use notifications::NotificationsPage;
use shell::{AdminShell, PrincipalShell, StudentShell, TeacherShell};
use summary::SummaryDashboardPage;
use unauthorized::Unauthorized;

/// Application routes. Every guarded path sits under `RouteGuard` and one
/// shell layout, mirroring `shared_types::navigation::ROUTE_TABLE`.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[layout(RouteGuard)]
        #[route("/")]
        Home {},
        #[layout(StudentShell)]
            #[route("/student-dashboard")]
            StudentDashboard {},
            #[route("/student-attendance")]
            StudentAttendance {},
            #[route("/student-assignments")]
            StudentAssignments {},
            #[route("/student-notifications")]
            StudentNotifications {},
        #[end_layout]
        #[layout(TeacherShell)]
            #[route("/teacher-dashboard")]
            TeacherDashboard {},
            #[route("/teacher-attendance")]
            TeacherAttendance {},
            #[route("/teacher-students")]
            TeacherStudents {},
            #[route("/teacher-assignments")]
            TeacherAssignments {},
            #[route("/teacher-notifications")]
            TeacherNotifications {},
        #[end_layout]
        #[layout(AdminShell)]
            #[route("/admin-dashboard")]
            AdminDashboard {},
            #[route("/admin-students")]
            AdminStudents {},
            #[route("/admin-teachers")]
            AdminTeachers {},
            #[route("/admin-attendance")]
            AdminAttendance {},
            #[route("/admin-notifications")]
            AdminNotifications {},
        #[end_layout]
        #[layout(PrincipalShell)]
            #[route("/principal-dashboard")]
            PrincipalDashboard {},
            #[route("/principal-students")]
            PrincipalStudents {},
            #[route("/principal-teachers")]
            PrincipalTeachers {},
            #[route("/principal-attendance")]
            PrincipalAttendance {},
            #[route("/principal-notifications")]
            PrincipalNotifications {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Router variant for a registered page.
pub fn route_for_page(page: Page) -> Route {
    match page {
        Page::StudentDashboard => Route::StudentDashboard {},
        Page::StudentAttendance => Route::StudentAttendance {},
        Page::StudentAssignments => Route::StudentAssignments {},
        Page::StudentNotifications => Route::StudentNotifications {},
        Page::TeacherDashboard => Route::TeacherDashboard {},
        Page::TeacherAttendance => Route::TeacherAttendance {},
        Page::TeacherStudents => Route::TeacherStudents {},
        Page::TeacherAssignments => Route::TeacherAssignments {},
        Page::TeacherNotifications => Route::TeacherNotifications {},
        Page::AdminDashboard => Route::AdminDashboard {},
        Page::AdminStudents => Route::AdminStudents {},
        Page::AdminTeachers => Route::AdminTeachers {},
        Page::AdminAttendance => Route::AdminAttendance {},
        Page::AdminNotifications => Route::AdminNotifications {},
        Page::PrincipalDashboard => Route::PrincipalDashboard {},
        Page::PrincipalStudents => Route::PrincipalStudents {},
        Page::PrincipalTeachers => Route::PrincipalTeachers {},
        Page::PrincipalAttendance => Route::PrincipalAttendance {},
        Page::PrincipalNotifications => Route::PrincipalNotifications {},
    }
}

pub fn home_route(role: Role) -> Route {
    match role {
        Role::Student => Route::StudentDashboard {},
        Role::Teacher => Route::TeacherDashboard {},
        Role::Admin => Route::AdminDashboard {},
        Role::Principal => Route::PrincipalDashboard {},
    }
}

pub fn redirect_route(redirect: Redirect) -> Route {
    match redirect {
        Redirect::Login => Route::Login {},
        Redirect::Unauthorized => Route::Unauthorized {},
        Redirect::Home(role) => home_route(role),
    }
}

/// Central navigation guard. Runs `navigate` once per route change; pages
/// below it never look at storage or the session role themselves.
#[component]
fn RouteGuard() -> Element {
    let route: Route = use_route();
    let store = use_session();

    if !store.is_restored() {
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        };
    }

    let path = route.to_string();
    match navigate(&path, &store.status(), app_config().routing.policy()) {
        Navigation::Render(_) | Navigation::Public(_) => rsx! { Outlet::<Route> {} },
        Navigation::Redirect(redirect) => {
            tracing::debug!(from = %path, to = redirect.path(), "Route guard redirect");
            navigator().replace(redirect_route(redirect));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        // Guarded variants all come from ROUTE_TABLE; unknown paths stop at
        // the router's own catch-all. This only fires if the two drift apart.
        Navigation::NotFound => {
            tracing::warn!(path = %path, "Guarded route missing from the route table");
            let segments = path
                .trim_start_matches('/')
                .split('/')
                .map(str::to_string)
                .collect::<Vec<_>>();
            rsx! { NotFound { route: segments } }
        }
    }
}

/// `/` only ever redirects; the guard handles it before this renders.
#[component]
fn Home() -> Element {
    rsx! {}
}

// Student pages

#[component]
fn StudentDashboard() -> Element {
    student::dashboard::StudentDashboardPage()
}

#[component]
fn StudentAttendance() -> Element {
    student::attendance::StudentAttendancePage()
}

#[component]
fn StudentAssignments() -> Element {
    student::assignments::StudentAssignmentsPage()
}

#[component]
fn StudentNotifications() -> Element {
    rsx! { NotificationsPage { audience: Audience::Students, can_post: false } }
}

// Teacher pages

#[component]
fn TeacherDashboard() -> Element {
    teacher::dashboard::TeacherDashboardPage()
}

#[component]
fn TeacherAttendance() -> Element {
    teacher::mark_attendance::MarkAttendancePage()
}

#[component]
fn TeacherStudents() -> Element {
    teacher::roster::ClassRosterPage()
}

#[component]
fn TeacherAssignments() -> Element {
    teacher::assignments::TeacherAssignmentsPage()
}

#[component]
fn TeacherNotifications() -> Element {
    rsx! { NotificationsPage { audience: Audience::Teachers, can_post: false } }
}

// Admin pages

#[component]
fn AdminDashboard() -> Element {
    rsx! { SummaryDashboardPage { role: Role::Admin } }
}

#[component]
fn AdminStudents() -> Element {
    rsx! { StudentDirectoryPage { can_create: true } }
}

#[component]
fn AdminTeachers() -> Element {
    rsx! { TeacherDirectoryPage { can_create: true } }
}

#[component]
fn AdminAttendance() -> Element {
    rsx! { AttendanceLookupPage {} }
}

#[component]
fn AdminNotifications() -> Element {
    rsx! { NotificationsPage { audience: Audience::All, can_post: true } }
}

// Principal pages

#[component]
fn PrincipalDashboard() -> Element {
    rsx! { SummaryDashboardPage { role: Role::Principal } }
}

#[component]
fn PrincipalStudents() -> Element {
    rsx! { StudentDirectoryPage { can_create: false } }
}

#[component]
fn PrincipalTeachers() -> Element {
    rsx! { TeacherDirectoryPage { can_create: false } }
}

#[component]
fn PrincipalAttendance() -> Element {
    rsx! { AttendanceLookupPage {} }
}

#[component]
fn PrincipalNotifications() -> Element {
    rsx! { NotificationsPage { audience: Audience::All, can_post: true } }
}
