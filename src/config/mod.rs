//! Labor law profile configuration.
//!
//! This module provides the [`ProfileStore`] type for loading labor law
//! profiles from YAML files.

mod loader;

pub use loader::ProfileStore;
