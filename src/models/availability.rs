//! Availability rules.
//!
//! Multiple rules per employee may coexist. UNAVAILABLE rules always take
//! precedence over AVAILABLE rules for any overlapping instant. Absence of
//! any AVAILABLE rule for an employee means open availability unless
//! blocked by an UNAVAILABLE rule.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Whether a rule grants or blocks availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityKind {
    /// The employee is available during the interval.
    Available,
    /// The employee must not be scheduled during the interval.
    Unavailable,
}

/// A single availability rule for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    /// The employee this rule applies to.
    pub employee_id: String,
    /// Whether the interval grants or blocks availability.
    pub kind: AvailabilityKind,
    /// The start of the interval.
    pub start_time: NaiveDateTime,
    /// The end of the interval.
    pub end_time: NaiveDateTime,
    /// Restricts the rule to one location. `None` applies everywhere.
    #[serde(default)]
    pub location_id: Option<String>,
}

impl AvailabilityRule {
    /// Returns true if this rule is in scope for the given location.
    pub fn applies_at(&self, location_id: &str) -> bool {
        match &self.location_id {
            Some(scoped) => scoped == location_id,
            None => true,
        }
    }
}
