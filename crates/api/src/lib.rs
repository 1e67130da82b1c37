//! Typed client for the Campus Sync Backend API.
//!
//! Every call returns `Result<T, AppError>`: transport failures become
//! `Network`, non-2xx answers go through [`AppError::from_status`], and bodies
//! that do not match the DTO become `Decode`. Request DTOs are validated
//! before anything is sent.
//!
//! [`AppError::from_status`]: shared_types::AppError::from_status

pub mod client;
pub mod validate;

pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod notifications;
pub mod students;
pub mod teachers;

pub use client::ApiClient;
pub use validate::ValidateRequest;
