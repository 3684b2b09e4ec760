//! Coverage requirements and shortfalls.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A time segment within a coverage requirement carrying a headcount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSegment {
    /// The start of the segment.
    pub start_time: NaiveDateTime,
    /// The end of the segment.
    pub end_time: NaiveDateTime,
    /// How many people of the requirement's role are needed during the
    /// segment.
    pub required: u32,
}

/// A statement of how many people of a given role must be on duty at a
/// location during each of a set of time segments.
///
/// Multiple requirements may apply to overlapping segments; the engine
/// supports segment-level granularity, not just day-level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRequirement {
    /// The role required on duty.
    pub role_id: String,
    /// The location the coverage applies to.
    pub location_id: String,
    /// The calendar date the segments fall on.
    pub date: NaiveDate,
    /// The demanded time segments.
    pub segments: Vec<CoverageSegment>,
}

/// A residual coverage deficit left after an auto-scheduling run.
///
/// Describes only the remaining unmet headcount for one segment; filled
/// units are not repeated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageShortfall {
    /// The role that could not be fully staffed.
    pub role_id: String,
    /// The location the deficit applies to.
    pub location_id: String,
    /// The calendar date of the segment.
    pub date: NaiveDate,
    /// The start of the unmet segment.
    pub start_time: NaiveDateTime,
    /// The end of the unmet segment.
    pub end_time: NaiveDateTime,
    /// How many headcount units remain unfilled.
    pub deficit: u32,
}
