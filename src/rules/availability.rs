//! Availability check.
//!
//! UNAVAILABLE rules always win over AVAILABLE rules for any overlapping
//! instant. An employee with no AVAILABLE rule at all has open
//! availability; an employee with AVAILABLE rules is expected to work
//! inside them, and a shift escaping all of them draws an advisory.

use crate::models::{AvailabilityKind, Employee, Shift, Violation, ViolationCode};
use crate::rules::EvaluationContext;
use crate::timeutil;

/// Checks the shift against the employee's availability rules.
///
/// - No employee: a soft `UNASSIGNED` notice.
/// - Any overlapping UNAVAILABLE rule in scope for the shift's location:
///   hard `AVAILABILITY`, one per offending rule.
/// - AVAILABLE rules exist but none fully contains the shift: soft
///   `OUTSIDE_AVAILABILITY`.
pub fn check_availability(
    shift: &Shift,
    employee: Option<&Employee>,
    context: &EvaluationContext<'_>,
) -> Vec<Violation> {
    let Some(employee) = employee else {
        return vec![Violation::soft(
            ViolationCode::Unassigned,
            Some(&shift.id),
            None,
            format!("Shift {} has no employee assigned", shift.id),
        )];
    };

    let mut violations = Vec::new();

    let rules = context
        .availability
        .iter()
        .filter(|rule| rule.employee_id == employee.id && rule.applies_at(&shift.location_id));

    let mut available_rules = Vec::new();
    for rule in rules {
        match rule.kind {
            AvailabilityKind::Unavailable => {
                if timeutil::overlaps(
                    rule.start_time,
                    rule.end_time,
                    shift.start_time,
                    shift.end_time,
                ) {
                    violations.push(
                        Violation::hard(
                            ViolationCode::Availability,
                            Some(&shift.id),
                            Some(&employee.id),
                            format!(
                                "{} is unavailable {} to {}",
                                employee.name, rule.start_time, rule.end_time
                            ),
                        )
                        .with_tag(&rule.start_time.format("%Y%m%d%H%M").to_string()),
                    );
                }
            }
            AvailabilityKind::Available => available_rules.push(rule),
        }
    }

    if !available_rules.is_empty() {
        let covered = available_rules.iter().any(|rule| {
            timeutil::spans(
                rule.start_time,
                rule.end_time,
                shift.start_time,
                shift.end_time,
            )
        });
        if !covered {
            violations.push(
                Violation::soft(
                    ViolationCode::OutsideAvailability,
                    Some(&shift.id),
                    Some(&employee.id),
                    format!(
                        "Shift falls outside {}'s declared availability",
                        employee.name
                    ),
                )
                .with_remediation("move the shift inside a declared availability window"),
            );
        }
    }

    violations
}
