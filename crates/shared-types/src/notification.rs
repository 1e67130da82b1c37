use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Who a notification is addressed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    All,
    Students,
    Teachers,
}

pub const ALL_AUDIENCES: &[Audience] = &[Audience::All, Audience::Students, Audience::Teachers];

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::All => "all",
            Audience::Students => "students",
            Audience::Teachers => "teachers",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "students" => Audience::Students,
            "teachers" => Audience::Teachers,
            _ => Audience::All,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Audience::All => "Everyone",
            Audience::Students => "Students",
            Audience::Teachers => "Teachers",
        }
    }
}

/// A notice posted by the admin or principal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub audience: Audience,
    /// ISO-8601 timestamp as sent by the backend.
    pub posted_at: String,
    pub posted_by: String,
}

/// Request DTO for posting a notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct NewNotification {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 120, message = "Title must be 1-120 characters"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Message is required"))
    )]
    pub message: String,
    pub audience: Audience,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_defaults_to_all_when_missing() {
        let json = r#"{"id":1,"title":"Holiday","message":"School closed Friday","posted_at":"2025-03-10T08:00:00Z","posted_by":"P-1"}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.audience, Audience::All);
    }

    #[test]
    fn audience_from_str_falls_back_to_all() {
        assert_eq!(Audience::from_str_or_default("teachers"), Audience::Teachers);
        assert_eq!(Audience::from_str_or_default("parents"), Audience::All);
    }
}
