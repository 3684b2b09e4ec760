//! Automatic scheduling.
//!
//! # Algorithm
//!
//! 1. Flatten coverage requirements into headcount slot demands and fill
//!    them greedily, highest demand first, picking the best-scoring
//!    hard-violation-free employee per slot ([`assign`]).
//! 2. Refine with bounded pairwise-swap local search: commit any employee
//!    swap that improves the combined candidate score beyond a threshold
//!    without introducing new hard violations ([`refine`]).
//!
//! The whole run is a pure function over its request: no randomness, no
//! clocks, no I/O. Identical requests (including roster ordering) produce
//! identical results, and concurrent runs are safe as long as each owns
//! its own request.

mod assign;
mod refine;
mod score;

pub use score::ScheduleScore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AvailabilityRule, CoverageRequirement, CoverageShortfall, Employee, LaborLawProfile, Role,
    Shift, Violation,
};

/// Soft scheduling preferences for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePreference {
    /// The employee these preferences belong to.
    pub employee_id: String,
    /// Roles the employee would rather work.
    #[serde(default)]
    pub preferred_role_ids: Vec<String>,
    /// Locations the employee would rather work at.
    #[serde(default)]
    pub preferred_location_ids: Vec<String>,
}

/// Non-negative multipliers applied to the candidate score terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleWeights {
    /// Weight on the marginal fairness contribution.
    #[serde(default = "default_unit_weight")]
    pub fairness: f64,
    /// Weight on the projected overtime penalty.
    #[serde(default = "default_unit_weight")]
    pub overtime: f64,
    /// Weight on the preference boost.
    #[serde(default = "default_unit_weight")]
    pub preference: f64,
    /// Weight on the hourly labor cost.
    #[serde(default = "default_cost_weight")]
    pub cost: f64,
}

fn default_unit_weight() -> f64 {
    1.0
}

fn default_cost_weight() -> f64 {
    0.5
}

impl Default for ScheduleWeights {
    fn default() -> Self {
        Self {
            fairness: 1.0,
            overtime: 1.0,
            preference: 1.0,
            cost: 0.5,
        }
    }
}

/// Tuning parameters for the local-search refinement phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefineConfig {
    /// Maximum number of full pairwise passes.
    #[serde(default = "default_max_passes")]
    pub max_passes: u32,
    /// Minimum combined-score improvement required to commit a swap.
    #[serde(default = "default_improvement_threshold")]
    pub improvement_threshold: f64,
}

fn default_max_passes() -> u32 {
    3
}

fn default_improvement_threshold() -> f64 {
    0.1
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            max_passes: 3,
            improvement_threshold: 0.1,
        }
    }
}

/// Everything one auto-scheduling run operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// First date of the scheduling window (informational).
    pub window_start: NaiveDate,
    /// Last date of the scheduling window (informational).
    pub window_end: NaiveDate,
    /// Full coverage requirements to satisfy.
    pub coverage: Vec<CoverageRequirement>,
    /// The roster of employees available for assignment.
    pub roster: Vec<Employee>,
    /// All availability rules.
    #[serde(default)]
    pub availability: Vec<AvailabilityRule>,
    /// Role definitions referenced by shifts and coverage.
    pub roles: Vec<Role>,
    /// The labor law profile in force for the run.
    pub profile: LaborLawProfile,
    /// Pre-existing shifts, assigned or not.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// Per-employee soft preferences.
    #[serde(default)]
    pub preferences: Vec<EmployeePreference>,
    /// Candidate-score weights.
    #[serde(default)]
    pub weights: ScheduleWeights,
    /// Local-search tuning.
    #[serde(default)]
    pub refine: RefineConfig,
}

/// The outcome of one auto-scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScheduleResult {
    /// The final working set: pre-existing shifts plus new assignments.
    pub shifts: Vec<Shift>,
    /// Residual coverage deficits that could not be filled.
    pub unmet: Vec<CoverageShortfall>,
    /// Every violation accumulated during both phases.
    pub violations: Vec<Violation>,
    /// Aggregate plan quality.
    pub score: ScheduleScore,
}

/// Runs the full two-phase auto-scheduler.
pub fn run(request: &ScheduleRequest) -> AutoScheduleResult {
    debug!(
        coverage = request.coverage.len(),
        roster = request.roster.len(),
        existing_shifts = request.shifts.len(),
        "starting auto-schedule run"
    );

    let assignment = assign::fill_coverage(request);
    debug!(
        assigned = assignment.working_set.len() - request.shifts.len(),
        unmet_units = assignment.unmet_units,
        "feasibility assignment complete"
    );

    let refinement = refine::refine(request, assignment.working_set, assignment.violations);
    debug!(swaps = refinement.swaps_committed, "refinement complete");

    let score = ScheduleScore::calculate(
        &request.roster,
        &refinement.working_set,
        &refinement.violations,
        assignment.demanded_units,
        assignment.unmet_units,
    );

    AutoScheduleResult {
        shifts: refinement.working_set,
        unmet: assignment.unmet,
        violations: refinement.violations,
        score,
    }
}

/// The apply gate: refuses any plan still containing hard violations.
///
/// Callers must never merge a result into the live schedule without going
/// through this check; a refusal surfaces the offending violations for
/// manual resolution.
///
/// # Errors
///
/// Returns [`EngineError::BlockedApply`] carrying the hard violations when
/// any are present.
pub fn apply(result: &AutoScheduleResult) -> EngineResult<Vec<Shift>> {
    let hard: Vec<Violation> = result
        .violations
        .iter()
        .filter(|violation| violation.is_hard())
        .cloned()
        .collect();
    if hard.is_empty() {
        Ok(result.shifts.clone())
    } else {
        Err(EngineError::BlockedApply {
            count: hard.len(),
            violations: hard,
        })
    }
}
