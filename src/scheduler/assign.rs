//! Phase 1: greedy feasibility assignment.
//!
//! Flattens coverage requirements into per-segment headcount demands and
//! fills them in descending order of required headcount (ties keep input
//! order). Each unfilled unit becomes a draft shift; every roster employee
//! is evaluated hypothetically against the current working set, hard
//! violators are skipped, and the best-scoring feasible employee wins.
//! Accepted assignments join the working set immediately so later slots
//! see updated fairness and overtime state.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    CoverageRequirement, CoverageShortfall, Employee, Shift, Violation, ViolationCode,
    has_hard_violation,
};
use crate::rules::{self, EvaluationContext};
use crate::scheduler::{EmployeePreference, ScheduleRequest, score};
use crate::timeutil;

/// One headcount demand for a single (role, location, segment).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SlotDemand {
    pub role_id: String,
    pub location_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub required: u32,
}

/// What Phase 1 hands to refinement and scoring.
#[derive(Debug)]
pub(crate) struct AssignmentOutcome {
    /// Pre-existing shifts plus the new assignments.
    pub working_set: Vec<Shift>,
    /// Residual deficits, one entry per under-filled segment.
    pub unmet: Vec<CoverageShortfall>,
    /// Violations accumulated while assigning.
    pub violations: Vec<Violation>,
    /// Total headcount units demanded across all segments.
    pub demanded_units: u32,
    /// Units that could not be feasibly filled.
    pub unmet_units: u32,
}

/// Flattens coverage requirements into slot demands, highest headcount
/// first. The sort is stable, so ties keep input order.
pub(crate) fn flatten_coverage(coverage: &[CoverageRequirement]) -> Vec<SlotDemand> {
    let mut demands: Vec<SlotDemand> = coverage
        .iter()
        .flat_map(|requirement| {
            requirement.segments.iter().map(|segment| SlotDemand {
                role_id: requirement.role_id.clone(),
                location_id: requirement.location_id.clone(),
                date: requirement.date,
                start_time: segment.start_time,
                end_time: segment.end_time,
                required: segment.required,
            })
        })
        .collect();
    demands.sort_by(|a, b| b.required.cmp(&a.required));
    demands
}

/// Fills every slot demand greedily against the request's working set.
pub(crate) fn fill_coverage(request: &ScheduleRequest) -> AssignmentOutcome {
    let mut working_set = request.shifts.clone();
    let mut violations = Vec::new();
    let mut unmet = Vec::new();
    let mut unmet_units = 0;
    let mut draft_counter = 0usize;

    let demands = flatten_coverage(&request.coverage);
    let demanded_units = demands.iter().map(|demand| demand.required).sum();

    for demand in &demands {
        let already_covering = working_set
            .iter()
            .filter(|shift| {
                shift.role_id == demand.role_id
                    && shift.location_id == demand.location_id
                    && timeutil::spans(
                        shift.start_time,
                        shift.end_time,
                        demand.start_time,
                        demand.end_time,
                    )
            })
            .count() as u32;
        let deficit = demand.required.saturating_sub(already_covering);

        let mut residual = 0;
        for _ in 0..deficit {
            draft_counter += 1;
            let draft = Shift {
                id: format!("auto_shift_{draft_counter:03}"),
                employee_id: None,
                role_id: demand.role_id.clone(),
                location_id: demand.location_id.clone(),
                start_time: demand.start_time,
                end_time: demand.end_time,
                break_min: None,
                status: Default::default(),
                notes: None,
            };

            match best_candidate(&draft, &working_set, request) {
                Some(selection) => {
                    let employee = &request.roster[selection.roster_index];
                    let assigned = draft.with_employee(Some(employee.id.clone()));
                    violations.extend(selection.violations);
                    if let Some(violation) =
                        preference_violation(&assigned, employee, &request.preferences)
                    {
                        violations.push(violation);
                    }
                    working_set.push(assigned);
                }
                None => {
                    unmet_units += 1;
                    residual += 1;
                    violations.push(Violation::hard(
                        ViolationCode::CoverageGap,
                        Some(&draft.id),
                        None,
                        format!(
                            "No feasible employee for {} at {} on {} ({} to {})",
                            demand.role_id,
                            demand.location_id,
                            demand.date,
                            demand.start_time.time(),
                            demand.end_time.time()
                        ),
                    ));
                }
            }
        }

        if residual > 0 {
            unmet.push(CoverageShortfall {
                role_id: demand.role_id.clone(),
                location_id: demand.location_id.clone(),
                date: demand.date,
                start_time: demand.start_time,
                end_time: demand.end_time,
                deficit: residual,
            });
        }
    }

    AssignmentOutcome {
        working_set,
        unmet,
        violations,
        demanded_units,
        unmet_units,
    }
}

struct CandidateSelection {
    roster_index: usize,
    violations: Vec<Violation>,
}

/// Evaluates every roster employee hypothetically on the draft shift and
/// returns the best-scoring feasible one, with the (soft-only) violations
/// its evaluation produced. Ties keep the earliest roster index.
fn best_candidate(
    draft: &Shift,
    working_set: &[Shift],
    request: &ScheduleRequest,
) -> Option<CandidateSelection> {
    let context = EvaluationContext {
        shifts: working_set,
        availability: &request.availability,
        profile: &request.profile,
        roles: &request.roles,
        roster: &request.roster,
    };

    let mut best: Option<(f64, CandidateSelection)> = None;
    for (roster_index, employee) in request.roster.iter().enumerate() {
        let hypothetical = draft.with_employee(Some(employee.id.clone()));
        let evaluation = rules::evaluate(&hypothetical, Some(employee), &context);
        if has_hard_violation(&evaluation) {
            continue;
        }
        let candidate_score = score::candidate_score(
            &hypothetical,
            employee,
            working_set,
            &request.roster,
            &request.preferences,
            &request.weights,
            &request.profile,
        );
        let improves = best
            .as_ref()
            .is_none_or(|(best_score, _)| candidate_score > *best_score);
        if improves {
            best = Some((
                candidate_score,
                CandidateSelection {
                    roster_index,
                    violations: evaluation,
                },
            ));
        }
    }
    best.map(|(_, selection)| selection)
}

/// A soft notice when an accepted assignment matches none of the chosen
/// employee's declared preferences. Employees who declared nothing never
/// produce one.
pub(crate) fn preference_violation(
    shift: &Shift,
    employee: &Employee,
    preferences: &[EmployeePreference],
) -> Option<Violation> {
    let preference = preferences
        .iter()
        .find(|preference| preference.employee_id == employee.id)?;
    let role_match = preference.preferred_role_ids.contains(&shift.role_id);
    let location_match = preference.preferred_location_ids.contains(&shift.location_id);
    if role_match || location_match {
        return None;
    }
    Some(Violation::soft(
        ViolationCode::Preference,
        Some(&shift.id),
        Some(&employee.id),
        format!(
            "Assignment matches none of {}'s preferred roles or locations",
            employee.name
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CoverageSegment;
    use crate::rules::testutil::{datetime, employee, lenient_profile, role, shift};
    use crate::scheduler::{RefineConfig, ScheduleWeights};

    fn request(roster: Vec<Employee>, coverage: Vec<CoverageRequirement>) -> ScheduleRequest {
        ScheduleRequest {
            window_start: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            window_end: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
            coverage,
            roster,
            availability: vec![],
            roles: vec![role("barista"), role("server")],
            profile: lenient_profile(),
            shifts: vec![],
            preferences: vec![],
            weights: ScheduleWeights::default(),
            refine: RefineConfig::default(),
        }
    }

    fn requirement(
        role_id: &str,
        date: &str,
        segments: Vec<(&str, &str, u32)>,
    ) -> CoverageRequirement {
        CoverageRequirement {
            role_id: role_id.to_string(),
            location_id: "downtown".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            segments: segments
                .into_iter()
                .map(|(start, end, required)| CoverageSegment {
                    start_time: datetime(start),
                    end_time: datetime(end),
                    required,
                })
                .collect(),
        }
    }

    #[test]
    fn test_flatten_orders_by_headcount_descending() {
        let coverage = vec![
            requirement(
                "barista",
                "2026-03-02",
                vec![
                    ("2026-03-02 06:00:00", "2026-03-02 12:00:00", 1),
                    ("2026-03-02 12:00:00", "2026-03-02 18:00:00", 3),
                ],
            ),
            requirement(
                "server",
                "2026-03-02",
                vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 2)],
            ),
        ];
        let demands = flatten_coverage(&coverage);
        let required: Vec<u32> = demands.iter().map(|demand| demand.required).collect();
        assert_eq!(required, vec![3, 2, 1]);
    }

    #[test]
    fn test_flatten_ties_keep_input_order() {
        let coverage = vec![
            requirement(
                "barista",
                "2026-03-02",
                vec![("2026-03-02 06:00:00", "2026-03-02 12:00:00", 1)],
            ),
            requirement(
                "server",
                "2026-03-02",
                vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 1)],
            ),
        ];
        let demands = flatten_coverage(&coverage);
        assert_eq!(demands[0].role_id, "barista");
        assert_eq!(demands[1].role_id, "server");
    }

    #[test]
    fn test_fill_assigns_distinct_employees_per_unit() {
        let coverage = vec![requirement(
            "barista",
            "2026-03-02",
            vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 2)],
        )];
        let outcome = fill_coverage(&request(
            vec![employee("emp_001"), employee("emp_002")],
            coverage,
        ));
        assert_eq!(outcome.working_set.len(), 2);
        // Overlap rules force the second unit onto the other employee
        let assigned: Vec<_> = outcome
            .working_set
            .iter()
            .map(|shift| shift.employee_id.clone().unwrap())
            .collect();
        assert!(assigned.contains(&"emp_001".to_string()));
        assert!(assigned.contains(&"emp_002".to_string()));
        assert_eq!(outcome.unmet_units, 0);
    }

    #[test]
    fn test_fill_later_slots_see_earlier_assignments() {
        // Two disjoint segments, one employee: both land on them, but the
        // fairness state after the first assignment is visible to the second
        // (no violation since segments do not overlap).
        let coverage = vec![requirement(
            "barista",
            "2026-03-02",
            vec![
                ("2026-03-02 06:00:00", "2026-03-02 10:00:00", 1),
                ("2026-03-02 12:00:00", "2026-03-02 16:00:00", 1),
            ],
        )];
        let outcome = fill_coverage(&request(vec![employee("emp_001")], coverage));
        assert_eq!(outcome.working_set.len(), 2);
        assert_eq!(outcome.unmet_units, 0);
    }

    #[test]
    fn test_fill_skips_hard_violators() {
        let mut minor = employee("emp_minor");
        minor.age = Some(16);
        minor.max_daily_min = Some(240); // Can't take the 8-hour slot
        let adult = employee("emp_adult");
        let coverage = vec![requirement(
            "barista",
            "2026-03-02",
            vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 1)],
        )];
        let outcome = fill_coverage(&request(vec![minor, adult], coverage));
        assert_eq!(outcome.working_set.len(), 1);
        assert_eq!(
            outcome.working_set[0].employee_id.as_deref(),
            Some("emp_adult")
        );
    }

    #[test]
    fn test_fill_existing_unassigned_shift_counts_toward_coverage() {
        let coverage = vec![requirement(
            "barista",
            "2026-03-02",
            vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 1)],
        )];
        let mut req = request(vec![employee("emp_001")], coverage);
        // Unassigned but spanning the segment: still coverage
        req.shifts = vec![shift("s0", None, "2026-03-02 09:00:00", "2026-03-02 17:00:00")];
        let outcome = fill_coverage(&req);
        assert_eq!(outcome.working_set.len(), 1);
        assert_eq!(outcome.unmet_units, 0);
    }

    #[test]
    fn test_fill_reports_shortfall_with_residual_deficit() {
        let coverage = vec![requirement(
            "server",
            "2026-03-02",
            vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 3)],
        )];
        // Only one employee holds "server"
        let mut qualified = employee("emp_001");
        qualified.role_ids = vec!["server".to_string()];
        let outcome = fill_coverage(&request(vec![qualified], coverage));
        assert_eq!(outcome.working_set.len(), 1);
        assert_eq!(outcome.unmet.len(), 1);
        assert_eq!(outcome.unmet[0].deficit, 2);
        assert_eq!(outcome.unmet_units, 2);
        assert_eq!(outcome.demanded_units, 3);
    }

    #[test]
    fn test_fill_collects_soft_violations_of_accepted_assignment() {
        let mut profile = lenient_profile();
        profile.overtime.daily_min = Some(240);
        let coverage = vec![requirement(
            "barista",
            "2026-03-02",
            vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 1)],
        )];
        let mut req = request(vec![employee("emp_001")], coverage);
        req.profile = profile;
        let outcome = fill_coverage(&req);
        assert_eq!(outcome.working_set.len(), 1);
        assert!(
            outcome
                .violations
                .iter()
                .any(|violation| violation.code == ViolationCode::DailyOvertime)
        );
    }

    #[test]
    fn test_preference_violation_emitted_on_mismatch() {
        let coverage = vec![requirement(
            "barista",
            "2026-03-02",
            vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 1)],
        )];
        let mut req = request(vec![employee("emp_001")], coverage);
        req.preferences = vec![EmployeePreference {
            employee_id: "emp_001".to_string(),
            preferred_role_ids: vec!["server".to_string()],
            preferred_location_ids: vec!["airport".to_string()],
        }];
        let outcome = fill_coverage(&req);
        assert!(
            outcome
                .violations
                .iter()
                .any(|violation| violation.code == ViolationCode::Preference)
        );
    }

    #[test]
    fn test_no_preference_violation_when_role_matches() {
        let coverage = vec![requirement(
            "barista",
            "2026-03-02",
            vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 1)],
        )];
        let mut req = request(vec![employee("emp_001")], coverage);
        req.preferences = vec![EmployeePreference {
            employee_id: "emp_001".to_string(),
            preferred_role_ids: vec!["barista".to_string()],
            preferred_location_ids: vec![],
        }];
        let outcome = fill_coverage(&req);
        assert!(
            !outcome
                .violations
                .iter()
                .any(|violation| violation.code == ViolationCode::Preference)
        );
    }

    #[test]
    fn test_draft_ids_are_sequential_and_deterministic() {
        let coverage = vec![requirement(
            "barista",
            "2026-03-02",
            vec![("2026-03-02 09:00:00", "2026-03-02 17:00:00", 2)],
        )];
        let outcome = fill_coverage(&request(
            vec![employee("emp_001"), employee("emp_002")],
            coverage,
        ));
        let ids: Vec<_> = outcome
            .working_set
            .iter()
            .map(|shift| shift.id.clone())
            .collect();
        assert_eq!(ids, vec!["auto_shift_001", "auto_shift_002"]);
    }
}
