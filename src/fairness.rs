//! Fairness model over assigned minutes.
//!
//! Given a roster and a set of shifts, computes each employee's total
//! scheduled minutes and a dispersion statistic summarizing how unevenly
//! hours are distributed. The dispersion is a discrete Gini coefficient,
//! scaled by `n/(n-1)` so that the "all minutes on one employee" extreme is
//! exactly 1.0 regardless of roster size. The derived fairness score
//! (`1 - dispersion`) is the only quantity the scorer and scheduler
//! consume; the raw totals are diagnostic outputs.

use crate::models::{Employee, Shift};

/// Per-employee totals plus the roster-wide dispersion statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct FairnessReport {
    /// Total assigned minutes per employee, in roster order. Employees
    /// with no assigned shifts appear with 0.
    pub minutes_by_employee: Vec<(String, i64)>,
    /// Dispersion in [0, 1]: 0 is perfectly equal, 1 is all minutes on one
    /// employee.
    pub dispersion: f64,
    /// `1 - dispersion`; higher is always better.
    pub fairness_score: f64,
}

/// Computes per-employee assigned minutes and the dispersion statistic.
///
/// Shifts with no employee identifier are ignored; shifts referencing an
/// employee outside the roster are ignored as well.
pub fn assess(roster: &[Employee], shifts: &[Shift]) -> FairnessReport {
    let minutes_by_employee: Vec<(String, i64)> = roster
        .iter()
        .map(|employee| {
            let minutes = shifts
                .iter()
                .filter(|shift| shift.is_assigned_to(&employee.id))
                .map(Shift::duration_minutes)
                .sum();
            (employee.id.clone(), minutes)
        })
        .collect();

    let dispersion = dispersion_of(
        &minutes_by_employee
            .iter()
            .map(|(_, minutes)| *minutes)
            .collect::<Vec<_>>(),
    );

    FairnessReport {
        minutes_by_employee,
        dispersion,
        fairness_score: 1.0 - dispersion,
    }
}

/// Convenience wrapper returning only the fairness score.
///
/// # Examples
///
/// ```
/// use roster_engine::fairness::fairness_score;
///
/// // Empty roster: defined as perfectly fair.
/// assert_eq!(fairness_score(&[], &[]), 1.0);
/// ```
pub fn fairness_score(roster: &[Employee], shifts: &[Shift]) -> f64 {
    assess(roster, shifts).fairness_score
}

/// Discrete Gini coefficient over per-employee minute totals, scaled so the
/// maximally-unequal case is exactly 1.
///
/// Totals of 0 still count as ranks. Defined as 0 when `n <= 1` or when no
/// minutes are assigned at all.
fn dispersion_of(totals: &[i64]) -> f64 {
    let n = totals.len();
    if n <= 1 {
        return 0.0;
    }
    let sum: i64 = totals.iter().sum();
    if sum == 0 {
        return 0.0;
    }

    let mut sorted = totals.to_vec();
    sorted.sort_unstable();

    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(index, &value)| (index as f64 + 1.0) * value as f64)
        .sum();

    let n_f = n as f64;
    let gini = (2.0 * weighted) / (n_f * sum as f64) - (n_f + 1.0) / n_f;

    // Small-sample scale: the raw formula tops out at 1 - 1/n.
    (gini * n_f / (n_f - 1.0)).clamp(0.0, 1.0)
}
