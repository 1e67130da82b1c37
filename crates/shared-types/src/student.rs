use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// A student record as returned by the Backend API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub admission_no: String,
    pub name: String,
    pub class_name: String,
    #[serde(default)]
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Request DTO for enrolling a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct NewStudent {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Admission number is required"))
    )]
    pub admission_no: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Name must be at least 2 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Class is required"))
    )]
    pub class_name: String,
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
