//! Profile loading functionality.
//!
//! Loads every labor law profile from a directory of YAML files and
//! serves them by name.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::LaborLawProfile;

/// Loads and provides access to labor law profiles.
///
/// # Directory Structure
///
/// The configuration directory holds one YAML file per profile:
/// ```text
/// config/profiles/
/// ├── standard.yaml
/// └── hospitality.yaml
/// ```
/// Each file deserializes into a [`LaborLawProfile`]; the profile's `name`
/// field (not the file name) is the lookup key.
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ProfileStore;
///
/// let store = ProfileStore::load("./config/profiles").unwrap();
/// let profile = store.get("standard").unwrap();
/// println!("Minimum rest: {} min", profile.rest_min);
/// ```
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: HashMap<String, LaborLawProfile>,
}

impl ProfileStore {
    /// Loads every `*.yaml` file in the directory as a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing, any file fails to
    /// parse, or no profile files are found at all.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound { path: path_str });
        }

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut profiles = HashMap::new();
        let mut file_paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
            .collect();
        file_paths.sort();

        for file_path in file_paths {
            let profile = Self::load_yaml(&file_path)?;
            profiles.insert(profile_name(&profile), profile);
        }

        if profiles.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no profile files found)", path_str),
            });
        }

        Ok(Self { profiles })
    }

    /// Builds a store from already-constructed profiles (used by tests and
    /// embedded callers).
    pub fn from_profiles(profiles: Vec<LaborLawProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile_name(&profile), profile))
                .collect(),
        }
    }

    fn load_yaml(path: &Path) -> EngineResult<LaborLawProfile> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Gets a profile by name.
    ///
    /// # Errors
    ///
    /// Returns `ProfileNotFound` for unknown names.
    pub fn get(&self, name: &str) -> EngineResult<&LaborLawProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| EngineError::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the loaded profile names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn profile_name(profile: &LaborLawProfile) -> String {
    profile.name.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/profiles"
    }

    #[test]
    fn test_load_shipped_profiles() {
        let result = ProfileStore::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let store = result.unwrap();
        assert_eq!(store.names(), vec!["hospitality", "standard"]);
    }

    #[test]
    fn test_get_standard_profile() {
        let store = ProfileStore::load(config_path()).unwrap();
        let profile = store.get("standard").unwrap();
        assert_eq!(profile.name, "standard");
        assert_eq!(profile.rest_min, 480);
        assert!(profile.minor.curfew.is_some());
        assert!(profile.breaks.meal_required);
    }

    #[test]
    fn test_get_hospitality_profile() {
        let store = ProfileStore::load(config_path()).unwrap();
        let profile = store.get("hospitality").unwrap();
        assert_eq!(profile.name, "hospitality");
        assert_eq!(profile.overtime.daily_min, Some(480));
    }

    #[test]
    fn test_get_unknown_profile_returns_error() {
        let store = ProfileStore::load(config_path()).unwrap();
        let result = store.get("unknown");
        match result {
            Err(EngineError::ProfileNotFound { name }) => assert_eq!(name, "unknown"),
            _ => panic!("Expected ProfileNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ProfileStore::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("/nonexistent/path"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_profiles() {
        let store = ProfileStore::load(config_path()).unwrap();
        let standard = store.get("standard").unwrap().clone();
        let rebuilt = ProfileStore::from_profiles(vec![standard]);
        assert_eq!(rebuilt.names(), vec!["standard"]);
        assert!(rebuilt.get("hospitality").is_err());
    }
}
