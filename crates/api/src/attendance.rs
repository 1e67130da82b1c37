use shared_types::{AppError, AttendanceMap, AttendanceRecord, AttendanceSheet, MessageResponse};

use crate::client::segment;
use crate::{ApiClient, ValidateRequest};

impl ApiClient {
    /// Raw attendance records for one student, in the order the backend sent them.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_attendance_records(
        &self,
        admission_no: &str,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        self.get_json(&format!("/api/attendance/{}", segment(admission_no)))
            .await
    }

    /// Attendance for one student keyed by date. Rebuilt from scratch on every call.
    pub async fn fetch_attendance(&self, admission_no: &str) -> Result<AttendanceMap, AppError> {
        let records = self.fetch_attendance_records(admission_no).await?;
        tracing::debug!(count = records.len(), "Fetched attendance records");
        Ok(AttendanceMap::from_records(&records))
    }

    #[tracing::instrument(skip(self, sheet), fields(class_name = %sheet.class_name, date = %sheet.date, entries = sheet.entries.len()))]
    pub async fn mark_attendance(&self, sheet: &AttendanceSheet) -> Result<MessageResponse, AppError> {
        sheet.validate_request()?;
        self.post_json("/api/attendance", sheet).await
    }
}
