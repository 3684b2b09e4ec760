//! Double-booking check.

use crate::models::{Employee, Shift, Violation, ViolationCode};
use crate::rules::EvaluationContext;
use crate::timeutil;

/// Flags any other shift assigned to the same employee whose interval
/// strictly overlaps the candidate's. Touching endpoints do not count.
pub fn check_overlap(
    shift: &Shift,
    employee: Option<&Employee>,
    context: &EvaluationContext<'_>,
) -> Vec<Violation> {
    let Some(employee) = employee else {
        return Vec::new();
    };

    context
        .other_shifts_for(shift, &employee.id)
        .filter(|other| {
            timeutil::overlaps(
                shift.start_time,
                shift.end_time,
                other.start_time,
                other.end_time,
            )
        })
        .map(|other| {
            Violation::hard(
                ViolationCode::Overlap,
                Some(&shift.id),
                Some(&employee.id),
                format!(
                    "Overlaps shift {} ({} to {})",
                    other.id, other.start_time, other.end_time
                ),
            )
            .with_tag(&other.id)
        })
        .collect()
}
