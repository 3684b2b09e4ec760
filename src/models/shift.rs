//! Shift model and related types.
//!
//! A shift is the mutable unit the engine reasons about. Its identity (id)
//! is stable across edits; start/end/employee/role/location may all change
//! via save operations performed by the caller. The engine itself never
//! mutates shifts in place; it only evaluates them and returns new
//! proposed shifts.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::timeutil;

/// Publication status of a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// Not yet visible to employees; the default for engine-proposed shifts.
    #[default]
    Draft,
    /// Committed to the published schedule.
    Published,
}

/// Represents a work shift, assigned or unassigned.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{Shift, ShiftStatus};
/// use chrono::NaiveDateTime;
///
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     employee_id: Some("emp_001".to_string()),
///     role_id: "barista".to_string(),
///     location_id: "downtown".to_string(),
///     start_time: NaiveDateTime::parse_from_str("2026-03-02 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-03-02 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     break_min: Some(30),
///     status: ShiftStatus::Draft,
///     notes: None,
/// };
/// assert_eq!(shift.duration_minutes(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift; stable across edits.
    pub id: String,
    /// The assigned employee, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The role this shift requires.
    pub role_id: String,
    /// The location this shift is worked at.
    pub location_id: String,
    /// The start of the shift.
    pub start_time: NaiveDateTime,
    /// The end of the shift.
    pub end_time: NaiveDateTime,
    /// Total recorded break minutes, if any.
    #[serde(default)]
    pub break_min: Option<i64>,
    /// Publication status.
    #[serde(default)]
    pub status: ShiftStatus,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Shift {
    /// Returns the scheduled duration of the shift in minutes.
    ///
    /// Breaks are not subtracted; break rules are evaluated separately.
    pub fn duration_minutes(&self) -> i64 {
        timeutil::minutes_between(self.start_time, self.end_time)
    }

    /// Returns the calendar date the shift starts on.
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Returns true if this shift is assigned to the given employee.
    pub fn is_assigned_to(&self, employee_id: &str) -> bool {
        self.employee_id.as_deref() == Some(employee_id)
    }

    /// Returns a copy of this shift assigned to the given employee.
    ///
    /// Used by the auto-scheduler to construct hypothetical assignments
    /// without mutating the working set.
    pub fn with_employee(&self, employee_id: Option<String>) -> Shift {
        Shift {
            employee_id,
            ..self.clone()
        }
    }
}
