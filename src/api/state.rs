//! Application state for the scheduling engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ProfileStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded labor law profiles.
#[derive(Clone)]
pub struct AppState {
    /// The loaded labor law profiles.
    profiles: Arc<ProfileStore>,
}

impl AppState {
    /// Creates a new application state with the given profile store.
    pub fn new(profiles: ProfileStore) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }

    /// Returns a reference to the profile store.
    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }
}
