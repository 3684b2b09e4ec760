//! Location reference data.

use serde::{Deserialize, Serialize};

/// A physical location shifts are worked at.
///
/// Static reference data; immutable during a scheduling run. The optional
/// timezone is informational: the engine never converts timestamps, the
/// caller resolves timezones before invoking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier for the location.
    pub id: String,
    /// Display name of the location.
    pub name: String,
    /// IANA timezone name, if known (e.g. "America/Chicago").
    #[serde(default)]
    pub timezone: Option<String>,
}
