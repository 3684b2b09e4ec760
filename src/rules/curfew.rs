//! Minor curfew check.
//!
//! Applies only when the employee's age is known and under 18 and the
//! labor profile defines a curfew window. Times of day are compared as
//! naive wall-clock values, consistent with the engine's timezone stance.

use crate::models::{Employee, Shift, Violation, ViolationCode};
use crate::rules::EvaluationContext;

/// Flags a minor's shift starting before the curfew's earliest start or
/// ending after its latest end. Both directions may fire together.
pub fn check_minor_curfew(
    shift: &Shift,
    employee: Option<&Employee>,
    context: &EvaluationContext<'_>,
) -> Vec<Violation> {
    let Some(employee) = employee else {
        return Vec::new();
    };
    if !employee.is_minor() {
        return Vec::new();
    }
    let Some(curfew) = context.profile.minor.curfew else {
        return Vec::new();
    };

    let mut violations = Vec::new();

    if shift.start_time.time() < curfew.earliest_start {
        violations.push(
            Violation::hard(
                ViolationCode::MinorCurfew,
                Some(&shift.id),
                Some(&employee.id),
                format!(
                    "{} is a minor; shift starts {} before curfew lifts at {}",
                    employee.name,
                    shift.start_time.time(),
                    curfew.earliest_start
                ),
            )
            .with_tag("start"),
        );
    }

    if shift.end_time.time() > curfew.latest_end {
        violations.push(
            Violation::hard(
                ViolationCode::MinorCurfew,
                Some(&shift.id),
                Some(&employee.id),
                format!(
                    "{} is a minor; shift ends {} after curfew at {}",
                    employee.name,
                    shift.end_time.time(),
                    curfew.latest_end
                ),
            )
            .with_tag("end"),
        );
    }

    violations
}
