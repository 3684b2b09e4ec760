//! Labor law profiles.
//!
//! A profile is a named bundle of the statutory limits one scheduling run
//! operates under: minor-employee limits, break rules, minimum rest, and
//! overtime advisory thresholds. Exactly one profile applies per run.
//! Profiles are typically loaded from YAML via [`crate::config::ProfileStore`].

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Curfew window for minor employees, expressed as times of day.
///
/// `earliest_start` is the earliest a minor may begin working;
/// `latest_end` is the latest a minor's shift may run. Comparisons are
/// naive wall-clock, matching the rest of the engine's timezone stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurfewWindow {
    /// Earliest permitted start time of day for a minor's shift.
    pub earliest_start: NaiveTime,
    /// Latest permitted end time of day for a minor's shift.
    pub latest_end: NaiveTime,
}

/// Scheduling limits for minor (under-18) employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinorLimits {
    /// Maximum scheduled minutes per day for a minor.
    pub max_daily_min: i64,
    /// Maximum scheduled minutes per week for a minor.
    pub max_weekly_min: i64,
    /// Curfew window, if the jurisdiction defines one.
    #[serde(default)]
    pub curfew: Option<CurfewWindow>,
}

/// Meal break rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRules {
    /// Whether a meal break is required at all.
    pub meal_required: bool,
    /// Minimum meal break length in minutes.
    pub min_meal_min: i64,
    /// Shift minutes after which a second meal break is required.
    pub second_meal_after_min: i64,
}

/// Soft overtime thresholds. Exceeding one produces an advisory
/// violation, never a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeThresholds {
    /// Daily minutes after which an overtime advisory fires.
    #[serde(default)]
    pub daily_min: Option<i64>,
    /// Weekly minutes after which an overtime advisory fires.
    #[serde(default)]
    pub weekly_min: Option<i64>,
}

/// A named bundle of labor-law constraints for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborLawProfile {
    /// Name of the profile (e.g. "standard").
    pub name: String,
    /// Limits applying to minor employees.
    pub minor: MinorLimits,
    /// Meal break rules.
    pub breaks: BreakRules,
    /// Minimum rest minutes between any two shifts for any employee.
    pub rest_min: i64,
    /// Overtime advisory thresholds.
    #[serde(default)]
    pub overtime: OvertimeThresholds,
}
