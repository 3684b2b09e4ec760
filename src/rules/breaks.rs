//! Meal break check.

use crate::models::{Employee, Shift, Violation, ViolationCode};
use crate::rules::EvaluationContext;

/// Shift minutes after which a meal break becomes mandatory.
pub const MEAL_REQUIRED_AFTER_MIN: i64 = 300;

/// Checks the shift's recorded break time against the profile's meal break
/// rules. All three sub-checks are gated on the profile requiring meal
/// breaks at all; the violation attaches to the shift's assigned employee
/// when one is known.
pub fn check_breaks(
    shift: &Shift,
    employee: Option<&Employee>,
    context: &EvaluationContext<'_>,
) -> Vec<Violation> {
    let rules = &context.profile.breaks;
    if !rules.meal_required {
        return Vec::new();
    }

    let employee_id = employee
        .map(|employee| employee.id.as_str())
        .or(shift.employee_id.as_deref());
    let duration = shift.duration_minutes();
    let break_total = shift.break_min.unwrap_or(0);

    let mut violations = Vec::new();

    if duration >= MEAL_REQUIRED_AFTER_MIN {
        if break_total == 0 {
            violations.push(
                Violation::hard(
                    ViolationCode::MealBreak,
                    Some(&shift.id),
                    employee_id,
                    format!(
                        "No meal break recorded on a {} min shift (required from {} min)",
                        duration, MEAL_REQUIRED_AFTER_MIN
                    ),
                )
                .with_remediation(format!("record a break of at least {} min", rules.min_meal_min)),
            );
        } else if break_total < rules.min_meal_min {
            violations.push(Violation::hard(
                ViolationCode::MealBreakShort,
                Some(&shift.id),
                employee_id,
                format!(
                    "Recorded break of {} min is shorter than the {} min minimum",
                    break_total, rules.min_meal_min
                ),
            ));
        }
    }

    if duration > rules.second_meal_after_min && break_total < 2 * rules.min_meal_min {
        violations.push(Violation::hard(
            ViolationCode::SecondMeal,
            Some(&shift.id),
            employee_id,
            format!(
                "Shift of {} min requires a second meal break; only {} min of break recorded",
                duration, break_total
            ),
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testutil::*;

    fn meal_profile() -> crate::models::LaborLawProfile {
        let mut profile = lenient_profile();
        profile.breaks.meal_required = true;
        profile
    }

    fn context<'a>(
        profile: &'a crate::models::LaborLawProfile,
        roster: &'a [crate::models::Employee],
        roles: &'a [crate::models::Role],
    ) -> EvaluationContext<'a> {
        EvaluationContext {
            shifts: &[],
            availability: &[],
            profile,
            roles,
            roster,
        }
    }

    #[test]
    fn test_long_shift_without_break_is_hard() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = meal_profile();
        // 8 hours, no break recorded
        let candidate = shift("s1", Some("emp_001"), "2026-03-02 09:00:00", "2026-03-02 17:00:00");
        let ctx = context(&profile, &roster, &roles);

        let violations = check_breaks(&candidate, Some(&roster[0]), &ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, ViolationCode::MealBreak);
        assert!(violations[0].is_hard());
    }

    #[test]
    fn test_short_shift_needs_no_break() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = meal_profile();
        // 4 hours: under the 5-hour trigger
        let candidate = shift("s1", Some("emp_001"), "2026-03-02 09:00:00", "2026-03-02 13:00:00");
        let ctx = context(&profile, &roster, &roles);

        assert!(check_breaks(&candidate, Some(&roster[0]), &ctx).is_empty());
    }

    #[test]
    fn test_recorded_break_too_short() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = meal_profile();
        let mut candidate =
            shift("s1", Some("emp_001"), "2026-03-02 09:00:00", "2026-03-02 17:00:00");
        candidate.break_min = Some(15);
        let ctx = context(&profile, &roster, &roles);

        let violations = check_breaks(&candidate, Some(&roster[0]), &ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, ViolationCode::MealBreakShort);
    }

    #[test]
    fn test_adequate_break_passes() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = meal_profile();
        let mut candidate =
            shift("s1", Some("emp_001"), "2026-03-02 09:00:00", "2026-03-02 17:00:00");
        candidate.break_min = Some(30);
        let ctx = context(&profile, &roster, &roles);

        assert!(check_breaks(&candidate, Some(&roster[0]), &ctx).is_empty());
    }

    #[test]
    fn test_second_meal_required_on_long_shift() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = meal_profile(); // Second meal after 600 min
        let mut candidate =
            shift("s1", Some("emp_001"), "2026-03-02 06:00:00", "2026-03-02 17:00:00");
        candidate.break_min = Some(30); // 660 min shift with one 30 min break
        let ctx = context(&profile, &roster, &roles);

        let violations = check_breaks(&candidate, Some(&roster[0]), &ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, ViolationCode::SecondMeal);
    }

    #[test]
    fn test_double_break_satisfies_second_meal() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = meal_profile();
        let mut candidate =
            shift("s1", Some("emp_001"), "2026-03-02 06:00:00", "2026-03-02 17:00:00");
        candidate.break_min = Some(60);
        let ctx = context(&profile, &roster, &roles);

        assert!(check_breaks(&candidate, Some(&roster[0]), &ctx).is_empty());
    }

    #[test]
    fn test_missing_break_and_second_meal_fire_together() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = meal_profile();
        // 11 hours, no break at all
        let candidate = shift("s1", Some("emp_001"), "2026-03-02 06:00:00", "2026-03-02 17:00:00");
        let ctx = context(&profile, &roster, &roles);

        let violations = check_breaks(&candidate, Some(&roster[0]), &ctx);
        let codes: Vec<_> = violations.iter().map(|violation| violation.code).collect();
        assert_eq!(
            codes,
            vec![ViolationCode::MealBreak, ViolationCode::SecondMeal]
        );
    }

    #[test]
    fn test_disabled_meal_requirement_is_quiet() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = lenient_profile(); // meal_required: false
        let candidate = shift("s1", Some("emp_001"), "2026-03-02 06:00:00", "2026-03-02 20:00:00");
        let ctx = context(&profile, &roster, &roles);

        assert!(check_breaks(&candidate, Some(&roster[0]), &ctx).is_empty());
    }

    #[test]
    fn test_unassigned_shift_still_checked() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = meal_profile();
        let candidate = shift("s1", None, "2026-03-02 09:00:00", "2026-03-02 17:00:00");
        let ctx = context(&profile, &roster, &roles);

        let violations = check_breaks(&candidate, None, &ctx);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].employee_id.is_none());
    }
}
