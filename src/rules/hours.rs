//! Daily/weekly cap and overtime check.
//!
//! Projects the employee's same-day and working-set totals with the
//! candidate shift added. Hard caps come from the employee's personal
//! limits, falling back to the profile's minor limits for minors; adults
//! without personal caps have no hard cap. The profile's overtime
//! thresholds independently produce soft advisories for everyone, except
//! on a dimension where a hard cap already fired.

use crate::models::{Employee, Shift, Violation, ViolationCode};
use crate::rules::EvaluationContext;

/// Checks projected daily and weekly totals against hard caps and soft
/// overtime thresholds. Both dimensions are evaluated independently, so a
/// single call may return e.g. `MAX_DAILY` and `WEEKLY_OVERTIME` together.
pub fn check_hours(
    shift: &Shift,
    employee: Option<&Employee>,
    context: &EvaluationContext<'_>,
) -> Vec<Violation> {
    let Some(employee) = employee else {
        return Vec::new();
    };

    let duration = shift.duration_minutes();
    let mut same_day = 0;
    let mut working_set = 0;
    for other in context.other_shifts_for(shift, &employee.id) {
        let minutes = other.duration_minutes();
        working_set += minutes;
        if other.date() == shift.date() {
            same_day += minutes;
        }
    }
    let projected_daily = same_day + duration;
    let projected_weekly = working_set + duration;

    let minor = &context.profile.minor;
    let daily_cap = employee
        .max_daily_min
        .or_else(|| employee.is_minor().then_some(minor.max_daily_min));
    let weekly_cap = employee
        .max_weekly_min
        .or_else(|| employee.is_minor().then_some(minor.max_weekly_min));

    let mut violations = Vec::new();

    let daily_capped = daily_cap.is_some_and(|cap| projected_daily > cap);
    if daily_capped {
        violations.push(
            Violation::hard(
                ViolationCode::MaxDaily,
                Some(&shift.id),
                Some(&employee.id),
                format!(
                    "Projected {} min on {} exceeds daily cap of {} min",
                    projected_daily,
                    shift.date(),
                    daily_cap.unwrap_or_default()
                ),
            )
            .with_remediation("shorten the shift or assign another employee"),
        );
    }

    let weekly_capped = weekly_cap.is_some_and(|cap| projected_weekly > cap);
    if weekly_capped {
        violations.push(
            Violation::hard(
                ViolationCode::MaxWeekly,
                Some(&shift.id),
                Some(&employee.id),
                format!(
                    "Projected {} min this week exceeds weekly cap of {} min",
                    projected_weekly,
                    weekly_cap.unwrap_or_default()
                ),
            )
            .with_remediation("spread hours across more employees"),
        );
    }

    let overtime = &context.profile.overtime;
    if !daily_capped {
        if let Some(threshold) = overtime.daily_min {
            if projected_daily > threshold {
                violations.push(Violation::soft(
                    ViolationCode::DailyOvertime,
                    Some(&shift.id),
                    Some(&employee.id),
                    format!(
                        "Projected {} min on {} exceeds the {} min daily overtime threshold",
                        projected_daily,
                        shift.date(),
                        threshold
                    ),
                ));
            }
        }
    }
    if !weekly_capped {
        if let Some(threshold) = overtime.weekly_min {
            if projected_weekly > threshold {
                violations.push(Violation::soft(
                    ViolationCode::WeeklyOvertime,
                    Some(&shift.id),
                    Some(&employee.id),
                    format!(
                        "Projected {} min this week exceeds the {} min weekly overtime threshold",
                        projected_weekly, threshold
                    ),
                ));
            }
        }
    }

    violations
}
