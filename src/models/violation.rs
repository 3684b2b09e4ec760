//! Violations produced by rule evaluation and scheduling.
//!
//! Violations are always derived, never stored; they are recomputed on
//! every evaluation call. Identifiers are deterministic strings derived
//! from the code and subject ids, so identical inputs always produce
//! identical violations (there is no randomness anywhere in the engine).

use serde::{Deserialize, Serialize};

/// Whether a violation blocks an assignment or merely advises.
///
/// Blocking decisions must match exhaustively on this enum so that new
/// violation kinds cannot silently bypass the block/allow logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Blocks the assignment from being committed.
    Hard,
    /// Advisory only; never blocks commitment.
    Soft,
}

/// Machine-readable violation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    /// The shift has no employee assigned.
    Unassigned,
    /// The shift overlaps an UNAVAILABLE interval.
    Availability,
    /// The shift falls outside every declared AVAILABLE interval.
    OutsideAvailability,
    /// The employee cannot fill the shift's role.
    RoleMismatch,
    /// The employee is missing a certification the role requires.
    Certification,
    /// Two shifts for the same employee overlap in time.
    Overlap,
    /// The shift's location is outside the employee's eligible list.
    Location,
    /// The gap to an adjacent shift is shorter than the minimum rest.
    Rest,
    /// A minor's shift starts or ends outside the curfew window.
    MinorCurfew,
    /// The projected daily total exceeds the hard daily cap.
    MaxDaily,
    /// The projected weekly total exceeds the hard weekly cap.
    MaxWeekly,
    /// The projected daily total exceeds the overtime advisory threshold.
    DailyOvertime,
    /// The projected weekly total exceeds the overtime advisory threshold.
    WeeklyOvertime,
    /// No meal break recorded on a shift long enough to require one.
    MealBreak,
    /// The recorded meal break is shorter than the minimum.
    MealBreakShort,
    /// A second meal break is due but insufficient break time is recorded.
    SecondMeal,
    /// A coverage headcount unit could not be feasibly filled.
    CoverageGap,
    /// An assignment matches none of the employee's declared preferences.
    Preference,
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ViolationCode::Unassigned => "UNASSIGNED",
            ViolationCode::Availability => "AVAILABILITY",
            ViolationCode::OutsideAvailability => "OUTSIDE_AVAILABILITY",
            ViolationCode::RoleMismatch => "ROLE_MISMATCH",
            ViolationCode::Certification => "CERTIFICATION",
            ViolationCode::Overlap => "OVERLAP",
            ViolationCode::Location => "LOCATION",
            ViolationCode::Rest => "REST",
            ViolationCode::MinorCurfew => "MINOR_CURFEW",
            ViolationCode::MaxDaily => "MAX_DAILY",
            ViolationCode::MaxWeekly => "MAX_WEEKLY",
            ViolationCode::DailyOvertime => "DAILY_OVERTIME",
            ViolationCode::WeeklyOvertime => "WEEKLY_OVERTIME",
            ViolationCode::MealBreak => "MEAL_BREAK",
            ViolationCode::MealBreakShort => "MEAL_BREAK_SHORT",
            ViolationCode::SecondMeal => "SECOND_MEAL",
            ViolationCode::CoverageGap => "COVERAGE_GAP",
            ViolationCode::Preference => "PREFERENCE",
        };
        write!(f, "{}", tag)
    }
}

/// A single compliance or operational rule breach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Deterministic identifier derived from code and subject ids.
    pub id: String,
    /// The shift the violation concerns, if any.
    #[serde(default)]
    pub shift_id: Option<String>,
    /// The employee the violation concerns, if any.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Whether the violation blocks or advises.
    pub kind: ViolationKind,
    /// Machine-readable code.
    pub code: ViolationCode,
    /// Human-readable message.
    pub message: String,
    /// Suggested remediation, if one is known.
    #[serde(default)]
    pub remediation: Option<String>,
}

impl Violation {
    fn new(
        kind: ViolationKind,
        code: ViolationCode,
        shift_id: Option<&str>,
        employee_id: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        let id = format!(
            "{}:{}:{}",
            code,
            shift_id.unwrap_or("-"),
            employee_id.unwrap_or("-"),
        );
        Self {
            id,
            shift_id: shift_id.map(str::to_string),
            employee_id: employee_id.map(str::to_string),
            kind,
            code,
            message: message.into(),
            remediation: None,
        }
    }

    /// Creates a hard (blocking) violation.
    pub fn hard(
        code: ViolationCode,
        shift_id: Option<&str>,
        employee_id: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ViolationKind::Hard, code, shift_id, employee_id, message)
    }

    /// Creates a soft (advisory) violation.
    pub fn soft(
        code: ViolationCode,
        shift_id: Option<&str>,
        employee_id: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ViolationKind::Soft, code, shift_id, employee_id, message)
    }

    /// Appends a discriminating tag to the id, for codes that can fire more
    /// than once per (shift, employee) pairing (e.g. REST before/after).
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.id.push(':');
        self.id.push_str(tag);
        self
    }

    /// Attaches a suggested remediation.
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }

    /// Returns true if this violation blocks assignment.
    pub fn is_hard(&self) -> bool {
        match self.kind {
            ViolationKind::Hard => true,
            ViolationKind::Soft => false,
        }
    }
}

/// Returns true if any violation in the slice is hard.
///
/// The single blocking reduction used by every caller that needs a
/// block/allow decision.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{has_hard_violation, Violation, ViolationCode};
///
/// let violations = vec![
///     Violation::soft(ViolationCode::DailyOvertime, Some("shift_001"), Some("emp_001"), "over"),
///     Violation::hard(ViolationCode::Overlap, Some("shift_001"), Some("emp_001"), "overlap"),
/// ];
/// assert!(has_hard_violation(&violations));
/// ```
pub fn has_hard_violation(violations: &[Violation]) -> bool {
    violations.iter().any(Violation::is_hard)
}
