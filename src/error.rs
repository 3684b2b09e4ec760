//! Error types for the scheduling engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around the engine: configuration
//! loading, profile lookup, and the apply gate. The evaluation and
//! scheduling algorithms themselves have no recoverable runtime errors;
//! their failure outcomes are domain outcomes (violations, coverage gaps).

use thiserror::Error;

use crate::models::Violation;

/// The main error type for the scheduling engine.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ProfileNotFound {
///     name: "unknown".to_string(),
/// };
/// assert_eq!(error.to_string(), "Labor law profile not found: unknown");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A labor law profile name was not found in the loaded store.
    #[error("Labor law profile not found: {name}")]
    ProfileNotFound {
        /// The profile name that was not found.
        name: String,
    },

    /// A caller attempted to apply a plan that still contains hard violations.
    #[error("Plan apply refused: {count} hard violation(s) outstanding")]
    BlockedApply {
        /// The number of outstanding hard violations.
        count: usize,
        /// The offending hard violations.
        violations: Vec<Violation>,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/profiles".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/profiles"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_profile_not_found_displays_name() {
        let error = EngineError::ProfileNotFound {
            name: "night_shift".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Labor law profile not found: night_shift"
        );
    }

    #[test]
    fn test_blocked_apply_displays_count() {
        let error = EngineError::BlockedApply {
            count: 2,
            violations: vec![],
        };
        assert_eq!(
            error.to_string(),
            "Plan apply refused: 2 hard violation(s) outstanding"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_profile_not_found() -> EngineResult<()> {
            Err(EngineError::ProfileNotFound {
                name: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_profile_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
