//! Attendance records and the calendar day classification.
//!
//! A calendar cell is classified from the fetched attendance map and the
//! weekday alone. Precedence, first match wins:
//!
//! 1. recorded `present`
//! 2. recorded `absent`
//! 3. Sunday
//! 4. anything else is "not uploaded"
//!
//! Only Sunday counts as a weekend. Saturdays without a record are
//! `NotUploaded`.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "validation")]
use validator::Validate;

/// Status recorded by a teacher for one student on one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

/// One row of `GET /api/attendance/{admission_no}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Sparse date → status lookup built from a fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttendanceMap(BTreeMap<NaiveDate, AttendanceStatus>);

impl AttendanceMap {
    /// Build from the ordered record sequence. A later record for the same
    /// date replaces an earlier one.
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        Self(records.iter().map(|r| (r.date, r.status)).collect())
    }

    pub fn get(&self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.0.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NaiveDate, AttendanceStatus)> for AttendanceMap {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, AttendanceStatus)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Display class of a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayClass {
    Present,
    Absent,
    Weekend,
    NotUploaded,
}

impl DayClass {
    /// CSS modifier used by the calendar widget.
    pub fn css_class(&self) -> &'static str {
        match self {
            DayClass::Present => "present",
            DayClass::Absent => "absent",
            DayClass::Weekend => "weekend",
            DayClass::NotUploaded => "not-uploaded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayClass::Present => "Present",
            DayClass::Absent => "Absent",
            DayClass::Weekend => "Weekend",
            DayClass::NotUploaded => "Not uploaded",
        }
    }
}

/// All classes in legend order.
pub const ALL_DAY_CLASSES: &[DayClass] = &[
    DayClass::Present,
    DayClass::Absent,
    DayClass::Weekend,
    DayClass::NotUploaded,
];

/// Classify one calendar date.
pub fn classify_day(date: NaiveDate, attendance: &AttendanceMap) -> DayClass {
    match attendance.get(date) {
        Some(AttendanceStatus::Present) => DayClass::Present,
        Some(AttendanceStatus::Absent) => DayClass::Absent,
        None if date.weekday() == Weekday::Sun => DayClass::Weekend,
        None => DayClass::NotUploaded,
    }
}

/// A derived calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub class: DayClass,
}

/// Year/month pointer for calendar navigation.
///
/// Holds the first day of the month, so every cursor names a real month.
/// Build one with [`MonthCursor::new`] or [`MonthCursor::containing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    first: NaiveDate,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl MonthCursor {
    /// Returns `None` when `month` is outside 1-12 or the year is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-12
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The following month. Stays put at the end of the supported date range.
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// The preceding month. Stays put at the start of the supported date range.
    pub fn prev(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first;
        first
            .iter_days()
            .take_while(move |d| d.month() == first.month())
    }

    /// "March 2025"
    pub fn title(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month().saturating_sub(1) as usize)
            .copied()
            .unwrap_or("");
        format!("{} {}", name, self.year())
    }
}

/// Sunday-first grid for one month. Leading cells before the 1st are `None`.
pub fn month_grid(cursor: MonthCursor) -> Vec<Option<NaiveDate>> {
    let lead = cursor.first_day().weekday().num_days_from_sunday() as usize;
    std::iter::repeat(None)
        .take(lead)
        .chain(cursor.days().map(Some))
        .collect()
}

/// Classify every day of a month.
pub fn build_month(cursor: MonthCursor, attendance: &AttendanceMap) -> Vec<CalendarDay> {
    cursor
        .days()
        .map(|date| CalendarDay {
            date,
            class: classify_day(date, attendance),
        })
        .collect()
}

/// Per-class counts for a range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceSummary {
    pub present: u32,
    pub absent: u32,
    pub weekend: u32,
    pub not_uploaded: u32,
}

impl AttendanceSummary {
    /// Share of recorded days marked present, 0-100. `None` with no records.
    pub fn percentage(&self) -> Option<f64> {
        let recorded = self.present + self.absent;
        if recorded == 0 {
            return None;
        }
        Some(self.present as f64 * 100.0 / recorded as f64)
    }
}

pub fn summarize(days: &[CalendarDay]) -> AttendanceSummary {
    days.iter().fold(AttendanceSummary::default(), |mut acc, day| {
        match day.class {
            DayClass::Present => acc.present += 1,
            DayClass::Absent => acc.absent += 1,
            DayClass::Weekend => acc.weekend += 1,
            DayClass::NotUploaded => acc.not_uploaded += 1,
        }
        acc
    })
}

/// Summary over every record in the map, independent of month.
pub fn summarize_records(attendance: &AttendanceMap) -> AttendanceSummary {
    attendance
        .0
        .values()
        .fold(AttendanceSummary::default(), |mut acc, status| {
            match status {
                AttendanceStatus::Present => acc.present += 1,
                AttendanceStatus::Absent => acc.absent += 1,
            }
            acc
        })
}

/// One student's mark in an attendance sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceEntry {
    pub admission_no: String,
    pub status: AttendanceStatus,
}

/// Request DTO a teacher submits for a class on a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct AttendanceSheet {
    pub date: NaiveDate,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Class is required"))
    )]
    pub class_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Mark at least one student"))
    )]
    pub entries: Vec<AttendanceEntry>,
}
