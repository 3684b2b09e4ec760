//! Role and certification check.

use crate::models::{Employee, Shift, Violation, ViolationCode};
use crate::rules::EvaluationContext;

/// Checks that the employee can fill the shift's role and holds every
/// certification the role requires.
pub fn check_qualification(
    shift: &Shift,
    employee: Option<&Employee>,
    context: &EvaluationContext<'_>,
) -> Vec<Violation> {
    let Some(employee) = employee else {
        return Vec::new();
    };

    let mut violations = Vec::new();

    if !employee.holds_role(&shift.role_id) {
        violations.push(Violation::hard(
            ViolationCode::RoleMismatch,
            Some(&shift.id),
            Some(&employee.id),
            format!("{} cannot fill role {}", employee.name, shift.role_id),
        ));
    }

    if let Some(role) = context.role(&shift.role_id) {
        let missing: Vec<&str> = role
            .required_certification_ids
            .iter()
            .filter(|certification| !employee.certification_ids.contains(certification))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            violations.push(
                Violation::hard(
                    ViolationCode::Certification,
                    Some(&shift.id),
                    Some(&employee.id),
                    format!(
                        "{} is missing required certification(s): {}",
                        employee.name,
                        missing.join(", ")
                    ),
                )
                .with_remediation(format!("assign an employee holding: {}", missing.join(", "))),
            );
        }
    }

    violations
}
