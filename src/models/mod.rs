//! Domain models for the scheduling engine.
//!
//! All types here are plain data: serde-serializable, free of UI and
//! persistence concerns. The engine consumes and produces these structures
//! and nothing else.

mod availability;
mod coverage;
mod employee;
mod labor_law;
mod location;
mod role;
mod shift;
mod violation;

pub use availability::{AvailabilityKind, AvailabilityRule};
pub use coverage::{CoverageRequirement, CoverageSegment, CoverageShortfall};
pub use employee::Employee;
pub use labor_law::{BreakRules, CurfewWindow, LaborLawProfile, MinorLimits, OvertimeThresholds};
pub use location::Location;
pub use role::Role;
pub use shift::{Shift, ShiftStatus};
pub use violation::{Violation, ViolationCode, ViolationKind, has_hard_violation};
