//! Static route table and the navigation guard.
//!
//! Shell selection depends only on the path. Whether the current session may
//! see that shell is a separate step governed by [`GuardPolicy`].

use crate::models::{AuthStatus, Role};

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// One of the four page shells (header + role sidebar + content slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shell {
    Student,
    Teacher,
    Admin,
    Principal,
}

impl Shell {
    /// The role a shell is built for.
    pub fn role(&self) -> Role {
        match self {
            Shell::Student => Role::Student,
            Shell::Teacher => Role::Teacher,
            Shell::Admin => Role::Admin,
            Shell::Principal => Role::Principal,
        }
    }

    /// URL prefix owning this shell, e.g. `/teacher-`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Shell::Student => "/student-",
            Shell::Teacher => "/teacher-",
            Shell::Admin => "/admin-",
            Shell::Principal => "/principal-",
        }
    }

    /// Shell owning a path, by prefix only.
    pub fn for_path(path: &str) -> Option<Self> {
        ALL_SHELLS
            .iter()
            .copied()
            .find(|shell| path.starts_with(shell.prefix()))
    }
}

pub const ALL_SHELLS: &[Shell] = &[Shell::Student, Shell::Teacher, Shell::Admin, Shell::Principal];

/// Content component rendered in a shell's content slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    StudentDashboard,
    StudentAttendance,
    StudentAssignments,
    StudentNotifications,
    TeacherDashboard,
    TeacherAttendance,
    TeacherStudents,
    TeacherAssignments,
    TeacherNotifications,
    AdminDashboard,
    AdminStudents,
    AdminTeachers,
    AdminAttendance,
    AdminNotifications,
    PrincipalDashboard,
    PrincipalStudents,
    PrincipalTeachers,
    PrincipalAttendance,
    PrincipalNotifications,
}

/// A registered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub shell: Shell,
    pub page: Page,
    /// Label used in the sidebar and the header title.
    pub title: &'static str,
}

impl RouteEntry {
    pub fn role(&self) -> Role {
        self.shell.role()
    }
}

const fn entry(path: &'static str, shell: Shell, page: Page, title: &'static str) -> RouteEntry {
    RouteEntry { path, shell, page, title }
}

/// Every guarded route, grouped by shell in sidebar order.
pub static ROUTE_TABLE: &[RouteEntry] = &[
    entry("/student-dashboard", Shell::Student, Page::StudentDashboard, "Dashboard"),
    entry("/student-attendance", Shell::Student, Page::StudentAttendance, "Attendance"),
    entry("/student-assignments", Shell::Student, Page::StudentAssignments, "Assignments"),
    entry("/student-notifications", Shell::Student, Page::StudentNotifications, "Notifications"),
    entry("/teacher-dashboard", Shell::Teacher, Page::TeacherDashboard, "Dashboard"),
    entry("/teacher-attendance", Shell::Teacher, Page::TeacherAttendance, "Mark Attendance"),
    entry("/teacher-students", Shell::Teacher, Page::TeacherStudents, "My Class"),
    entry("/teacher-assignments", Shell::Teacher, Page::TeacherAssignments, "Assignments"),
    entry("/teacher-notifications", Shell::Teacher, Page::TeacherNotifications, "Notifications"),
    entry("/admin-dashboard", Shell::Admin, Page::AdminDashboard, "Dashboard"),
    entry("/admin-students", Shell::Admin, Page::AdminStudents, "Students"),
    entry("/admin-teachers", Shell::Admin, Page::AdminTeachers, "Teachers"),
    entry("/admin-attendance", Shell::Admin, Page::AdminAttendance, "Attendance"),
    entry("/admin-notifications", Shell::Admin, Page::AdminNotifications, "Notifications"),
    entry("/principal-dashboard", Shell::Principal, Page::PrincipalDashboard, "Dashboard"),
    entry("/principal-students", Shell::Principal, Page::PrincipalStudents, "Students"),
    entry("/principal-teachers", Shell::Principal, Page::PrincipalTeachers, "Teachers"),
    entry("/principal-attendance", Shell::Principal, Page::PrincipalAttendance, "Attendance"),
    entry("/principal-notifications", Shell::Principal, Page::PrincipalNotifications, "Notifications"),
];

/// Routes belonging to one shell, in sidebar order.
pub fn routes_for(shell: Shell) -> impl Iterator<Item = &'static RouteEntry> {
    ROUTE_TABLE.iter().filter(move |e| e.shell == shell)
}

/// Pages reachable without a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicPage {
    Login,
    Unauthorized,
}

/// Result of looking a path up in the route table, before any session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `/`, resolved against the session to a home page or the login page.
    Entry,
    Public(PublicPage),
    Shell(&'static RouteEntry),
    NotFound,
}

/// Strip query, fragment and trailing slash.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Look a path up. Pure function of the path and the static table.
pub fn resolve(path: &str) -> Resolution {
    let path = normalize_path(path);
    match path {
        "/" => Resolution::Entry,
        LOGIN_PATH => Resolution::Public(PublicPage::Login),
        UNAUTHORIZED_PATH => Resolution::Public(PublicPage::Unauthorized),
        _ => ROUTE_TABLE
            .iter()
            .find(|e| e.path == path)
            .map(Resolution::Shell)
            .unwrap_or(Resolution::NotFound),
    }
}

/// Where a redirect sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Unauthorized,
    Home(Role),
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => LOGIN_PATH,
            Redirect::Unauthorized => UNAUTHORIZED_PATH,
            Redirect::Home(role) => role.home_path(),
        }
    }
}

/// How strictly the guard ties shells to session roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardPolicy {
    /// When false, any authenticated session receives whichever shell the
    /// URL selects.
    pub enforce_role_match: bool,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self { enforce_role_match: true }
    }
}

/// Outcome of one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(&'static RouteEntry),
    Public(PublicPage),
    Redirect(Redirect),
    NotFound,
}

/// Decide what to do for `path` given the session. Called once per navigation.
pub fn navigate(path: &str, auth: &AuthStatus, policy: GuardPolicy) -> Navigation {
    match resolve(path) {
        Resolution::NotFound => Navigation::NotFound,
        Resolution::Public(page) => Navigation::Public(page),
        Resolution::Entry => match auth {
            AuthStatus::Anonymous => Navigation::Redirect(Redirect::Login),
            AuthStatus::InvalidRole(_) => Navigation::Redirect(Redirect::Unauthorized),
            AuthStatus::Authenticated(session) => Navigation::Redirect(Redirect::Home(session.role)),
        },
        Resolution::Shell(entry) => match auth {
            AuthStatus::Anonymous => Navigation::Redirect(Redirect::Login),
            AuthStatus::InvalidRole(_) => Navigation::Redirect(Redirect::Unauthorized),
            AuthStatus::Authenticated(session) => {
                if policy.enforce_role_match && session.role != entry.role() {
                    Navigation::Redirect(Redirect::Unauthorized)
                } else {
                    Navigation::Render(entry)
                }
            }
        },
    }
}
