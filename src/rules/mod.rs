//! Rule evaluation engine.
//!
//! This module contains the compliance and operational checks applied to a
//! candidate shift: availability, role and certification qualification,
//! overlap detection, location eligibility, rest periods, minor curfew,
//! daily/weekly caps with overtime advisories, and meal break rules.
//!
//! Every check is a named pure function with the signature
//! `(shift, Option<&Employee>, &EvaluationContext) -> Vec<Violation>`.
//! [`evaluate`] runs all of them unconditionally in a fixed order and
//! concatenates the results, so the returned list is deterministic for
//! identical inputs. No check mutates its inputs.

mod availability;
mod breaks;
mod curfew;
mod hours;
mod location;
mod overlap;
mod qualification;
mod rest;

pub use availability::check_availability;
pub use breaks::check_breaks;
pub use curfew::check_minor_curfew;
pub use hours::check_hours;
pub use location::check_location;
pub use overlap::check_overlap;
pub use qualification::check_qualification;
pub use rest::check_rest;

use crate::models::{AvailabilityRule, Employee, LaborLawProfile, Role, Shift, Violation};

/// Read-only bundle of everything a check may consult.
///
/// The `shifts` slice is the full working set; checks that iterate over it
/// exclude the shift under evaluation by id, so callers may pass the
/// candidate shift inside or outside the slice interchangeably.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// All currently-known shifts (the working set).
    pub shifts: &'a [Shift],
    /// All availability rules.
    pub availability: &'a [AvailabilityRule],
    /// The active labor law profile.
    pub profile: &'a LaborLawProfile,
    /// All role definitions.
    pub roles: &'a [Role],
    /// The full roster.
    pub roster: &'a [Employee],
}

impl<'a> EvaluationContext<'a> {
    /// Looks up a role definition by id.
    pub fn role(&self, role_id: &str) -> Option<&'a Role> {
        self.roles.iter().find(|role| role.id == role_id)
    }

    /// Looks up a roster employee by id.
    pub fn employee(&self, employee_id: &str) -> Option<&'a Employee> {
        self.roster.iter().find(|employee| employee.id == employee_id)
    }

    /// Iterates the working set's other shifts assigned to the given
    /// employee, excluding the shift under evaluation by id.
    pub fn other_shifts_for(
        &self,
        evaluated: &'a Shift,
        employee_id: &'a str,
    ) -> impl Iterator<Item = &'a Shift> {
        let evaluated_id = evaluated.id.clone();
        self.shifts
            .iter()
            .filter(move |shift| shift.id != evaluated_id && shift.is_assigned_to(employee_id))
    }
}

/// Evaluates one candidate shift against every check, in fixed order.
///
/// Returns the concatenated violations. A single call may legitimately
/// return several violations (e.g. both `MAX_DAILY` and `WEEKLY_OVERTIME`).
/// Use [`crate::models::has_hard_violation`] for the block/allow decision.
pub fn evaluate(
    shift: &Shift,
    employee: Option<&Employee>,
    context: &EvaluationContext<'_>,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    violations.extend(check_availability(shift, employee, context));
    violations.extend(check_qualification(shift, employee, context));
    violations.extend(check_overlap(shift, employee, context));
    violations.extend(check_location(shift, employee, context));
    violations.extend(check_rest(shift, employee, context));
    violations.extend(check_minor_curfew(shift, employee, context));
    violations.extend(check_hours(shift, employee, context));
    violations.extend(check_breaks(shift, employee, context));
    violations
}
