//! Rest period check.
//!
//! The minimum rest is the employee's personal `min_rest_min` when set,
//! else the labor profile's `rest_min`. Gaps are measured in raw minutes
//! with no timezone normalization; callers resolve timezones beforehand.

use crate::models::{Employee, Shift, Violation, ViolationCode};
use crate::rules::EvaluationContext;
use crate::timeutil;

/// Flags adjacent shifts of the same employee separated by less than the
/// minimum rest. Reported separately for the "before" and "after"
/// direction; overlapping shifts are the overlap check's concern.
pub fn check_rest(
    shift: &Shift,
    employee: Option<&Employee>,
    context: &EvaluationContext<'_>,
) -> Vec<Violation> {
    let Some(employee) = employee else {
        return Vec::new();
    };

    let min_rest = employee.min_rest_min.unwrap_or(context.profile.rest_min);
    if min_rest <= 0 {
        return Vec::new();
    }

    let mut violations = Vec::new();
    for other in context.other_shifts_for(shift, &employee.id) {
        if other.end_time <= shift.start_time {
            let gap = timeutil::minutes_between(other.end_time, shift.start_time);
            if gap < min_rest {
                violations.push(
                    Violation::hard(
                        ViolationCode::Rest,
                        Some(&shift.id),
                        Some(&employee.id),
                        format!(
                            "Only {} min rest after shift {} (minimum {} min)",
                            gap, other.id, min_rest
                        ),
                    )
                    .with_tag(&format!("before:{}", other.id)),
                );
            }
        } else if other.start_time >= shift.end_time {
            let gap = timeutil::minutes_between(shift.end_time, other.start_time);
            if gap < min_rest {
                violations.push(
                    Violation::hard(
                        ViolationCode::Rest,
                        Some(&shift.id),
                        Some(&employee.id),
                        format!(
                            "Only {} min rest before shift {} (minimum {} min)",
                            gap, other.id, min_rest
                        ),
                    )
                    .with_tag(&format!("after:{}", other.id)),
                );
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testutil::*;

    fn restful_profile() -> crate::models::LaborLawProfile {
        let mut profile = lenient_profile();
        profile.rest_min = 480;
        profile
    }

    #[test]
    fn test_short_gap_after_previous_shift_is_hard() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = restful_profile();
        let shifts = vec![shift(
            "s0",
            Some("emp_001"),
            "2026-03-02 08:00:00",
            "2026-03-02 16:00:00",
        )];
        // Only 6 hours after the previous shift ends
        let candidate = shift("s1", Some("emp_001"), "2026-03-02 22:00:00", "2026-03-03 02:00:00");
        let context = EvaluationContext {
            shifts: &shifts,
            availability: &[],
            profile: &profile,
            roles: &roles,
            roster: &roster,
        };

        let violations = check_rest(&candidate, Some(&roster[0]), &context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, ViolationCode::Rest);
        assert!(violations[0].id.ends_with("before:s0"));
        assert!(violations[0].message.contains("360 min"));
    }

    #[test]
    fn test_short_gap_before_next_shift_is_hard() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = restful_profile();
        let shifts = vec![shift(
            "s2",
            Some("emp_001"),
            "2026-03-03 04:00:00",
            "2026-03-03 12:00:00",
        )];
        let candidate = shift("s1", Some("emp_001"), "2026-03-02 14:00:00", "2026-03-02 22:00:00");
        let context = EvaluationContext {
            shifts: &shifts,
            availability: &[],
            profile: &profile,
            roles: &roles,
            roster: &roster,
        };

        let violations = check_rest(&candidate, Some(&roster[0]), &context);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].id.ends_with("after:s2"));
    }

    #[test]
    fn test_sufficient_gap_passes() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = restful_profile();
        let shifts = vec![shift(
            "s0",
            Some("emp_001"),
            "2026-03-02 08:00:00",
            "2026-03-02 16:00:00",
        )];
        // Exactly 8 hours of rest
        let candidate = shift("s1", Some("emp_001"), "2026-03-03 00:00:00", "2026-03-03 08:00:00");
        let context = EvaluationContext {
            shifts: &shifts,
            availability: &[],
            profile: &profile,
            roles: &roles,
            roster: &roster,
        };

        assert!(check_rest(&candidate, Some(&roster[0]), &context).is_empty());
    }

    #[test]
    fn test_rest_monotonicity_shrinking_gap_never_clears() {
        // If a gap already violates, every smaller gap must also violate.
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = restful_profile();
        let shifts = vec![shift(
            "s0",
            Some("emp_001"),
            "2026-03-02 00:00:00",
            "2026-03-02 08:00:00",
        )];
        let context = EvaluationContext {
            shifts: &shifts,
            availability: &[],
            profile: &profile,
            roles: &roles,
            roster: &roster,
        };

        let mut last_violated = false;
        // Gaps of 7h, 5h, 3h, 1h: once violated, stays violated
        for start in ["15:00:00", "13:00:00", "11:00:00", "09:00:00"] {
            let candidate = shift(
                "s1",
                Some("emp_001"),
                &format!("2026-03-02 {start}"),
                "2026-03-02 23:00:00",
            );
            let violated = !check_rest(&candidate, Some(&roster[0]), &context).is_empty();
            assert!(violated || !last_violated);
            last_violated = violated;
        }
        assert!(last_violated);
    }

    #[test]
    fn test_employee_override_takes_precedence() {
        let mut worker = employee("emp_001");
        worker.min_rest_min = Some(120);
        let roster = vec![worker.clone()];
        let roles = vec![role("barista")];
        let profile = restful_profile(); // Profile says 480, employee says 120
        let shifts = vec![shift(
            "s0",
            Some("emp_001"),
            "2026-03-02 08:00:00",
            "2026-03-02 16:00:00",
        )];
        // 3 hours of rest: fine under the personal 120-minute floor
        let candidate = shift("s1", Some("emp_001"), "2026-03-02 19:00:00", "2026-03-02 23:00:00");
        let context = EvaluationContext {
            shifts: &shifts,
            availability: &[],
            profile: &profile,
            roles: &roles,
            roster: &roster,
        };

        assert!(check_rest(&candidate, Some(&worker), &context).is_empty());
    }

    #[test]
    fn test_zero_minimum_disables_check() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = lenient_profile(); // rest_min = 0
        let shifts = vec![shift(
            "s0",
            Some("emp_001"),
            "2026-03-02 08:00:00",
            "2026-03-02 16:00:00",
        )];
        let candidate = shift("s1", Some("emp_001"), "2026-03-02 16:30:00", "2026-03-02 20:00:00");
        let context = EvaluationContext {
            shifts: &shifts,
            availability: &[],
            profile: &profile,
            roles: &roles,
            roster: &roster,
        };

        assert!(check_rest(&candidate, Some(&roster[0]), &context).is_empty());
    }

    #[test]
    fn test_overlapping_shift_not_reported_here() {
        let roster = vec![employee("emp_001")];
        let roles = vec![role("barista")];
        let profile = restful_profile();
        let shifts = vec![shift(
            "s0",
            Some("emp_001"),
            "2026-03-02 08:00:00",
            "2026-03-02 16:00:00",
        )];
        let candidate = shift("s1", Some("emp_001"), "2026-03-02 12:00:00", "2026-03-02 20:00:00");
        let context = EvaluationContext {
            shifts: &shifts,
            availability: &[],
            profile: &profile,
            roles: &roles,
            roster: &roster,
        };

        assert!(check_rest(&candidate, Some(&roster[0]), &context).is_empty());
    }
}
