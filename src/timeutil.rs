//! Minute-precision interval arithmetic.
//!
//! Pure, stateless helpers over [`chrono::NaiveDateTime`] used by the rule
//! checks and the auto-scheduler. All timestamps are treated as absolute
//! instants; no timezone conversion is performed here, callers resolve
//! timezones before invoking the engine. Malformed ranges (end before
//! start) are a caller contract violation, not guarded against.

use chrono::NaiveDateTime;

/// Returns the signed number of minutes from `start` to `end`, rounded to
/// the nearest minute.
///
/// # Examples
///
/// ```
/// use roster_engine::timeutil::minutes_between;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-03-02 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-02 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(minutes_between(start, end), 510);
/// assert_eq!(minutes_between(end, start), -510);
/// ```
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let seconds = (end - start).num_seconds();
    let whole = seconds / 60;
    let remainder = seconds % 60;
    if remainder.abs() >= 30 {
        whole + remainder.signum()
    } else {
        whole
    }
}

/// Strict interval intersection test. Touching endpoints do not count as
/// overlapping.
///
/// # Examples
///
/// ```
/// use roster_engine::timeutil::overlaps;
/// use chrono::NaiveDateTime;
///
/// let t = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(overlaps(
///     t("2026-03-02 09:00:00"), t("2026-03-02 17:00:00"),
///     t("2026-03-02 16:00:00"), t("2026-03-02 20:00:00"),
/// ));
/// // Back-to-back shifts do not overlap.
/// assert!(!overlaps(
///     t("2026-03-02 09:00:00"), t("2026-03-02 17:00:00"),
///     t("2026-03-02 17:00:00"), t("2026-03-02 20:00:00"),
/// ));
/// ```
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Returns true if `point` falls within the inclusive range `[start, end]`.
pub fn contains_instant(point: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    start <= point && point <= end
}

/// Returns true if `[outer_start, outer_end]` fully contains
/// `[inner_start, inner_end]`.
pub fn spans(
    outer_start: NaiveDateTime,
    outer_end: NaiveDateTime,
    inner_start: NaiveDateTime,
    inner_end: NaiveDateTime,
) -> bool {
    outer_start <= inner_start && inner_end <= outer_end
}
