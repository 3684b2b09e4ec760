//! Location eligibility check.

use crate::models::{Employee, Shift, Violation, ViolationCode};
use crate::rules::EvaluationContext;

/// Flags assignments at locations outside the employee's eligible list.
/// Employees without a restricted list may work anywhere.
pub fn check_location(
    shift: &Shift,
    employee: Option<&Employee>,
    _context: &EvaluationContext<'_>,
) -> Vec<Violation> {
    let Some(employee) = employee else {
        return Vec::new();
    };

    if employee.eligible_at(&shift.location_id) {
        return Vec::new();
    }

    vec![Violation::hard(
        ViolationCode::Location,
        Some(&shift.id),
        Some(&employee.id),
        format!(
            "{} is not eligible to work at {}",
            employee.name, shift.location_id
        ),
    )]
}
