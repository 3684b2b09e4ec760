//! Phase 2: pairwise-swap local search.
//!
//! Up to `max_passes` full passes over every unordered pair of assigned
//! shifts with different employees. A swap is committed when both swapped
//! pairings stay free of hard violations and the combined candidate score
//! improves by more than the configured threshold. A pass committing zero
//! swaps ends refinement early.

use crate::models::{Shift, Violation, ViolationCode, has_hard_violation};
use crate::rules::{self, EvaluationContext};
use crate::scheduler::{ScheduleRequest, assign, score};

/// What refinement hands back to the driver.
#[derive(Debug)]
pub(crate) struct RefinementOutcome {
    /// The refined working set.
    pub working_set: Vec<Shift>,
    /// The accumulated violations, updated for committed swaps.
    pub violations: Vec<Violation>,
    /// Total swaps committed across all passes.
    pub swaps_committed: u32,
}

/// Runs the bounded pairwise-swap refinement over the working set.
pub(crate) fn refine(
    request: &ScheduleRequest,
    mut working_set: Vec<Shift>,
    mut violations: Vec<Violation>,
) -> RefinementOutcome {
    let mut swaps_committed = 0;
    for _ in 0..request.refine.max_passes {
        let mut committed_this_pass = 0;
        for i in 0..working_set.len() {
            for j in (i + 1)..working_set.len() {
                if try_swap(request, &mut working_set, &mut violations, i, j) {
                    committed_this_pass += 1;
                }
            }
        }
        swaps_committed += committed_this_pass;
        if committed_this_pass == 0 {
            break;
        }
    }
    RefinementOutcome {
        working_set,
        violations,
        swaps_committed,
    }
}

/// Attempts one swap; commits it into `working_set` and `violations` when
/// it is feasible and improving. Returns whether a commit happened.
fn try_swap(
    request: &ScheduleRequest,
    working_set: &mut Vec<Shift>,
    violations: &mut Vec<Violation>,
    i: usize,
    j: usize,
) -> bool {
    let (Some(employee_id_i), Some(employee_id_j)) = (
        working_set[i].employee_id.clone(),
        working_set[j].employee_id.clone(),
    ) else {
        return false;
    };
    if employee_id_i == employee_id_j {
        return false;
    }
    let Some(employee_i) = request
        .roster
        .iter()
        .find(|employee| employee.id == employee_id_i)
    else {
        return false;
    };
    let Some(employee_j) = request
        .roster
        .iter()
        .find(|employee| employee.id == employee_id_j)
    else {
        return false;
    };

    let mut swapped = working_set.clone();
    swapped[i] = working_set[i].with_employee(Some(employee_id_j.clone()));
    swapped[j] = working_set[j].with_employee(Some(employee_id_i.clone()));

    let context = EvaluationContext {
        shifts: &swapped,
        availability: &request.availability,
        profile: &request.profile,
        roles: &request.roles,
        roster: &request.roster,
    };
    let evaluation_i = rules::evaluate(&swapped[i], Some(employee_j), &context);
    let evaluation_j = rules::evaluate(&swapped[j], Some(employee_i), &context);
    if has_hard_violation(&evaluation_i) || has_hard_violation(&evaluation_j) {
        return false;
    }

    let original = score::candidate_score(
        &working_set[i],
        employee_i,
        &without(working_set, i),
        &request.roster,
        &request.preferences,
        &request.weights,
        &request.profile,
    ) + score::candidate_score(
        &working_set[j],
        employee_j,
        &without(working_set, j),
        &request.roster,
        &request.preferences,
        &request.weights,
        &request.profile,
    );
    let post_swap = score::candidate_score(
        &swapped[i],
        employee_j,
        &without(&swapped, i),
        &request.roster,
        &request.preferences,
        &request.weights,
        &request.profile,
    ) + score::candidate_score(
        &swapped[j],
        employee_i,
        &without(&swapped, j),
        &request.roster,
        &request.preferences,
        &request.weights,
        &request.profile,
    );

    if post_swap <= original + request.refine.improvement_threshold {
        return false;
    }

    // Preference notices track the current pairing, so the two swapped
    // shifts get theirs recomputed.
    let shift_id_i = swapped[i].id.clone();
    let shift_id_j = swapped[j].id.clone();
    violations.retain(|violation| {
        violation.code != ViolationCode::Preference
            || (violation.shift_id.as_deref() != Some(&shift_id_i)
                && violation.shift_id.as_deref() != Some(&shift_id_j))
    });
    if let Some(violation) = assign::preference_violation(&swapped[i], employee_j, &request.preferences)
    {
        violations.push(violation);
    }
    if let Some(violation) = assign::preference_violation(&swapped[j], employee_i, &request.preferences)
    {
        violations.push(violation);
    }
    for violation in evaluation_i.into_iter().chain(evaluation_j) {
        if !violations.iter().any(|existing| existing.id == violation.id) {
            violations.push(violation);
        }
    }

    *working_set = swapped;
    true
}

fn without(shifts: &[Shift], index: usize) -> Vec<Shift> {
    shifts
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != index)
        .map(|(_, shift)| shift.clone())
        .collect()
}
