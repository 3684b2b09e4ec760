//! Request types for the scheduling engine API.
//!
//! The domain models are already plain serde data, so the request bodies
//! embed them directly; these envelopes add the profile selection (by
//! name, resolved against the loaded [`crate::config::ProfileStore`]) and
//! the optional fields' defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AvailabilityRule, CoverageRequirement, Employee, LaborLawProfile, Role, Shift};
use crate::scheduler::{
    EmployeePreference, RefineConfig, ScheduleRequest, ScheduleWeights,
};

fn default_profile() -> String {
    "standard".to_string()
}

/// Request body for the `POST /evaluate` endpoint.
///
/// Carries one candidate shift, the employee it would be assigned to (by
/// id, optional), and the evaluation context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Name of the labor law profile to evaluate under.
    #[serde(default = "default_profile")]
    pub profile: String,
    /// The candidate shift.
    pub shift: Shift,
    /// The employee to evaluate the shift against, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The full roster.
    #[serde(default)]
    pub roster: Vec<Employee>,
    /// All other currently-known shifts.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// All availability rules.
    #[serde(default)]
    pub availability: Vec<AvailabilityRule>,
    /// Role definitions.
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Request body for the `POST /schedule` endpoint.
///
/// Mirrors the engine's [`ScheduleRequest`] with the profile given by
/// name instead of inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRunRequest {
    /// Name of the labor law profile for the run.
    #[serde(default = "default_profile")]
    pub profile: String,
    /// First date of the scheduling window.
    pub window_start: NaiveDate,
    /// Last date of the scheduling window.
    pub window_end: NaiveDate,
    /// Full coverage requirements to satisfy.
    pub coverage: Vec<CoverageRequirement>,
    /// The roster of employees available for assignment.
    pub roster: Vec<Employee>,
    /// All availability rules.
    #[serde(default)]
    pub availability: Vec<AvailabilityRule>,
    /// Role definitions referenced by shifts and coverage.
    #[serde(default)]
    pub roles: Vec<Role>,
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

impl ScheduleRunRequest {
    /// Converts into the engine request once the named profile is resolved.
    pub fn into_engine_request(self, profile: LaborLawProfile) -> ScheduleRequest {
        ScheduleRequest {
            window_start: self.window_start,
            window_end: self.window_end,
            coverage: self.coverage,
            roster: self.roster,
            availability: self.availability,
            roles: self.roles,
            profile,
            shifts: self.shifts,
            preferences: self.preferences,
            weights: self.weights,
            refine: self.refine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_evaluate_request() {
        let json = r#"{
            "shift": {
                "id": "shift_001",
                "role_id": "barista",
                "location_id": "downtown",
                "start_time": "2026-03-02T09:00:00",
                "end_time": "2026-03-02T17:00:00"
            }
        }"#;
        let request: EvaluateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.profile, "standard");
        assert!(request.employee_id.is_none());
        assert!(request.roster.is_empty());
    }

    #[test]
    fn test_deserialize_schedule_request_with_defaults() {
        let json = r#"{
            "profile": "hospitality",
            "window_start": "2026-03-02",
            "window_end": "2026-03-08",
            "coverage": [],
            "roster": [],
            "roles": []
        }"#;
        let request: ScheduleRunRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.profile, "hospitality");
        assert!(request.shifts.is_empty());
        assert_eq!(request.weights, ScheduleWeights::default());
        assert_eq!(request.refine.max_passes, 3);
    }

    #[test]
    fn test_into_engine_request_carries_profile() {
        let json = r#"{
            "window_start": "2026-03-02",
            "window_end": "2026-03-08",
            "coverage": [],
            "roster": [],
            "roles": []
        }"#;
        let request: ScheduleRunRequest = serde_json::from_str(json).unwrap();
        let profile: LaborLawProfile = serde_yaml::from_str(
            r#"
name: standard
minor:
  max_daily_min: 480
  max_weekly_min: 1080
breaks:
  meal_required: false
  min_meal_min: 30
  second_meal_after_min: 600
rest_min: 0
"#,
        )
        .unwrap();
        let engine_request = request.into_engine_request(profile);
        assert_eq!(engine_request.profile.name, "standard");
    }
}
