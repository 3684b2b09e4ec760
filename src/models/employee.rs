//! Employee model and related types.
//!
//! This module defines the Employee struct for representing roster members
//! in the scheduling engine. Employees are read-only during a scheduling
//! run; they are mutated only by external HR processes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee on the roster.
///
/// # Examples
///
/// ```
/// use roster_engine::models::Employee;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Dana Reyes".to_string(),
///     age: Some(16),
///     role_ids: vec!["cashier".to_string()],
///     certification_ids: vec![],
///     max_daily_min: None,
///     max_weekly_min: None,
///     min_rest_min: None,
///     eligible_location_ids: None,
///     hourly_rate: None,
/// };
/// assert!(employee.is_minor());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name of the employee.
    pub name: String,
    /// Age in years, if known. Drives minor-labor rules.
    #[serde(default)]
    pub age: Option<u8>,
    /// Roles this employee is able to fill.
    #[serde(default)]
    pub role_ids: Vec<String>,
    /// Certifications this employee holds.
    #[serde(default)]
    pub certification_ids: Vec<String>,
    /// Personal cap on scheduled minutes per day, if any.
    #[serde(default)]
    pub max_daily_min: Option<i64>,
    /// Personal cap on scheduled minutes per week, if any.
    #[serde(default)]
    pub max_weekly_min: Option<i64>,
    /// Personal minimum rest minutes between shifts, if any. Overrides the
    /// labor profile's minimum when set.
    #[serde(default)]
    pub min_rest_min: Option<i64>,
    /// Locations this employee may work at. `None` means unrestricted.
    #[serde(default)]
    pub eligible_location_ids: Option<Vec<String>>,
    /// Hourly labor cost, if tracked.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

impl Employee {
    /// Returns true if the employee's age is known and under 18.
    pub fn is_minor(&self) -> bool {
        self.age.is_some_and(|age| age < 18)
    }

    /// Returns true if the employee can fill the given role.
    pub fn holds_role(&self, role_id: &str) -> bool {
        self.role_ids.iter().any(|r| r == role_id)
    }

    /// Returns true if the employee may work at the given location.
    ///
    /// Employees without a restricted eligible-location list may work
    /// anywhere.
    pub fn eligible_at(&self, location_id: &str) -> bool {
        match &self.eligible_location_ids {
            Some(locations) => locations.iter().any(|l| l == location_id),
            None => true,
        }
    }
}
