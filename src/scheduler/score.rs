//! Candidate scoring and the aggregate plan score.
//!
//! The candidate score ranks hypothetical (employee, shift) pairings for
//! both greedy assignment and swap evaluation:
//!
//! `score = wF * fairnessDelta - wO * overtimePenalty + wP * preferenceBoost - wC * hourlyCost`
//!
//! The aggregate [`ScheduleScore`] rolls fairness, coverage fill,
//! preference satisfaction, and cost efficiency into one number used to
//! report plan quality.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::fairness;
use crate::models::{Employee, LaborLawProfile, Shift, Violation, ViolationCode};
use crate::scheduler::{EmployeePreference, ScheduleWeights};

/// Preference boost for a shift on a preferred role.
const ROLE_PREFERENCE_BOOST: f64 = 0.5;
/// Preference boost for a shift at a preferred location.
const LOCATION_PREFERENCE_BOOST: f64 = 0.25;
/// Penalty per overtime-coded violation in the weighted total.
const OVERTIME_TOTAL_PENALTY: f64 = 0.02;

/// Scores a hypothetical assignment of `employee` to `shift` against the
/// rest of the working set (`others` must exclude the shift itself).
pub(crate) fn candidate_score(
    shift: &Shift,
    employee: &Employee,
    others: &[Shift],
    roster: &[Employee],
    preferences: &[EmployeePreference],
    weights: &ScheduleWeights,
    profile: &LaborLawProfile,
) -> f64 {
    let mut with_candidate = others.to_vec();
    with_candidate.push(shift.clone());
    let fairness_delta =
        fairness::fairness_score(roster, &with_candidate) - fairness::fairness_score(roster, others);

    let overtime_penalty = overtime_excess_hours(shift, employee, others, profile);
    let preference_boost = preference_boost(shift, employee, preferences);
    let hourly_cost = labor_cost(shift, employee).to_f64().unwrap_or(0.0);

    weights.fairness * fairness_delta - weights.overtime * overtime_penalty
        + weights.preference * preference_boost
        - weights.cost * hourly_cost
}

/// Hours beyond the employee's daily and weekly thresholds projected by
/// adding this shift, summed across both dimensions; zero within limits.
///
/// Thresholds are the employee's personal caps when set, else the
/// profile's overtime advisory thresholds, so the optimizer steers away
/// from exactly what the rule engine would flag.
fn overtime_excess_hours(
    shift: &Shift,
    employee: &Employee,
    others: &[Shift],
    profile: &LaborLawProfile,
) -> f64 {
    let duration = shift.duration_minutes();
    let mut same_day = 0;
    let mut working_set = 0;
    for other in others {
        if !other.is_assigned_to(&employee.id) {
            continue;
        }
        let minutes = other.duration_minutes();
        working_set += minutes;
        if other.date() == shift.date() {
            same_day += minutes;
        }
    }

    let mut excess_minutes = 0;
    if let Some(threshold) = employee.max_daily_min.or(profile.overtime.daily_min) {
        excess_minutes += (same_day + duration - threshold).max(0);
    }
    if let Some(threshold) = employee.max_weekly_min.or(profile.overtime.weekly_min) {
        excess_minutes += (working_set + duration - threshold).max(0);
    }
    excess_minutes as f64 / 60.0
}

/// Additive preference boost: +0.5 for a preferred role, +0.25 for a
/// preferred location.
fn preference_boost(shift: &Shift, employee: &Employee, preferences: &[EmployeePreference]) -> f64 {
    let Some(preference) = preferences
        .iter()
        .find(|preference| preference.employee_id == employee.id)
    else {
        return 0.0;
    };
    let mut boost = 0.0;
    if preference.preferred_role_ids.contains(&shift.role_id) {
        boost += ROLE_PREFERENCE_BOOST;
    }
    if preference.preferred_location_ids.contains(&shift.location_id) {
        boost += LOCATION_PREFERENCE_BOOST;
    }
    boost
}

/// The employee's hourly rate times the shift duration in hours; zero when
/// no rate is set.
fn labor_cost(shift: &Shift, employee: &Employee) -> Decimal {
    match employee.hourly_rate {
        Some(rate) => rate * Decimal::from(shift.duration_minutes()) / Decimal::from(60),
        None => Decimal::ZERO,
    }
}

/// Aggregate quality metrics for a completed scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleScore {
    /// Fairness score of the final working set, in [0, 1].
    pub fairness: f64,
    /// Count of overtime-coded violations accumulated during the run.
    pub overtime_violations: u32,
    /// `1 - unmet / demanded` headcount units; 1.0 when nothing was demanded.
    pub coverage_ratio: f64,
    /// `1 - preference violations / assigned shifts`; 1.0 when nothing is
    /// assigned.
    pub preference_ratio: f64,
    /// `1 / (1 + total labor cost)`.
    pub cost_efficiency: f64,
    /// Average of the four ratios minus 0.02 per overtime violation.
    pub total: f64,
}

impl ScheduleScore {
    /// Computes the aggregate score from a run's outputs.
    pub fn calculate(
        roster: &[Employee],
        shifts: &[Shift],
        violations: &[Violation],
        demanded_units: u32,
        unmet_units: u32,
    ) -> Self {
        let fairness = fairness::fairness_score(roster, shifts);

        let overtime_violations = violations
            .iter()
            .filter(|violation| {
                matches!(
                    violation.code,
                    ViolationCode::DailyOvertime | ViolationCode::WeeklyOvertime
                )
            })
            .count() as u32;

        let coverage_ratio = if demanded_units == 0 {
            1.0
        } else {
            1.0 - unmet_units as f64 / demanded_units as f64
        };

        let assigned_count = shifts
            .iter()
            .filter(|shift| shift.employee_id.is_some())
            .count();
        let preference_violations = violations
            .iter()
            .filter(|violation| violation.code == ViolationCode::Preference)
            .count();
        let preference_ratio = if assigned_count == 0 {
            1.0
        } else {
            1.0 - preference_violations as f64 / assigned_count as f64
        };

        let total_cost: Decimal = shifts
            .iter()
            .filter_map(|shift| {
                let employee_id = shift.employee_id.as_deref()?;
                let employee = roster.iter().find(|employee| employee.id == employee_id)?;
                Some(labor_cost(shift, employee))
            })
            .sum();
        let cost_efficiency = 1.0 / (1.0 + total_cost.to_f64().unwrap_or(0.0));

        let total = (fairness + coverage_ratio + preference_ratio + cost_efficiency) / 4.0
            - OVERTIME_TOTAL_PENALTY * overtime_violations as f64;

        Self {
            fairness,
            overtime_violations,
            coverage_ratio,
            preference_ratio,
            cost_efficiency,
            total,
        }
    }
}
