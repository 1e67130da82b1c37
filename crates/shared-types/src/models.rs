use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Portal role. Each role owns one page shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
    Principal,
}

/// All roles in login-selector order.
pub const ALL_ROLES: &[Role] = &[Role::Student, Role::Teacher, Role::Principal, Role::Admin];

impl Role {
    /// Parse a stored or wire role string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "teacher" => Some(Role::Teacher),
            "admin" => Some(Role::Admin),
            "principal" => Some(Role::Principal),
            _ => None,
        }
    }

    /// Lowercase string used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
            Role::Principal => "principal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
            Role::Principal => "Principal",
        }
    }

    /// Landing page after login.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Student => "/student-dashboard",
            Role::Teacher => "/teacher-dashboard",
            Role::Admin => "/admin-dashboard",
            Role::Principal => "/principal-dashboard",
        }
    }
}

/// An authenticated user's session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub role: Role,
    pub unique_id: String,
    pub token: String,
}

/// Raw session as kept in browser storage. The role is still a free string
/// here; [`AuthStatus::from_stored`] decides whether it is usable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredSession {
    pub role: String,
    pub unique_id: String,
    pub token: String,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self {
            role: session.role.as_str().to_string(),
            unique_id: session.unique_id.clone(),
            token: session.token.clone(),
        }
    }
}

/// What the route guard knows about the current user.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthStatus {
    #[default]
    Anonymous,
    /// A session exists but carries a role outside the four known ones.
    InvalidRole(String),
    Authenticated(Session),
}

impl AuthStatus {
    pub fn from_stored(stored: Option<StoredSession>) -> Self {
        match stored {
            None => AuthStatus::Anonymous,
            Some(s) => match Role::parse(&s.role) {
                Some(role) => AuthStatus::Authenticated(Session {
                    role,
                    unique_id: s.unique_id,
                    token: s.token,
                }),
                None => AuthStatus::InvalidRole(s.role),
            },
        }
    }

    /// Parse the JSON blob read from storage. Garbage counts as no session.
    pub fn from_storage_json(raw: Option<&str>) -> Self {
        let stored = raw.and_then(|json| serde_json::from_str::<StoredSession>(json).ok());
        Self::from_stored(stored)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthStatus::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Unique ID is required"))
    )]
    pub unique_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
    pub role: Role,
}

/// Login response from the Backend API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub unique_id: String,
}

impl LoginResponse {
    /// Convert into a session, rejecting roles the portal does not know.
    pub fn into_session(self) -> Option<Session> {
        Role::parse(&self.role).map(|role| Session {
            role,
            unique_id: self.unique_id,
            token: self.token,
        })
    }
}

impl From<LoginResponse> for StoredSession {
    fn from(response: LoginResponse) -> Self {
        Self {
            role: response.role,
            unique_id: response.unique_id,
            token: response.token,
        }
    }
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// Aggregated counts for the admin and principal dashboards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_classes: i64,
    #[serde(default)]
    pub total_notifications: i64,
}
