//! Role reference data.

use serde::{Deserialize, Serialize};

/// A role that employees can fill (e.g. "nurse", "barista").
///
/// Static reference data; immutable during a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier for the role.
    pub id: String,
    /// Display name of the role.
    pub name: String,
    /// Certifications an employee must hold to work this role.
    #[serde(default)]
    pub required_certification_ids: Vec<String>,
}
