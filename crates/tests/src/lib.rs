#[cfg(test)]
mod common;

#[cfg(test)]
mod attendance_fetch_tests;

#[cfg(test)]
mod attendance_mark_tests;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod client_error_tests;

#[cfg(test)]
mod directory_tests;

#[cfg(test)]
mod notification_tests;

#[cfg(test)]
mod portal_flow_tests;
