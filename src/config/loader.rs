//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the work
//! policy and break policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{BreakPolicy, WorkPolicy, BREAK_POLICY_VERSION};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the parsed policies to the request handlers.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml        # Standard day, night window, premiums
/// └── break_policy.yaml  # Unpaid break windows
/// ```
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// assert_eq!(loader.work_policy().standard_day_minutes, 480);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    work_policy: WorkPolicy,
    break_policy: BreakPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML or a malformed "HH:MM" time
    /// - The break policy carries an unsupported schema version
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let work_policy = Self::load_yaml::<WorkPolicy>(&policy_path)?;

        let break_policy_path = path.join("break_policy.yaml");
        let break_policy = Self::load_yaml::<BreakPolicy>(&break_policy_path)?;

        if break_policy.version != BREAK_POLICY_VERSION {
            return Err(EngineError::ConfigParseError {
                path: break_policy_path.display().to_string(),
                message: format!(
                    "unsupported break policy version {} (expected {})",
                    break_policy.version, BREAK_POLICY_VERSION
                ),
            });
        }

        Ok(Self {
            work_policy,
            break_policy,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the work policy.
    pub fn work_policy(&self) -> &WorkPolicy {
        &self.work_policy
    }

    /// Returns the company's break policy.
    pub fn break_policy(&self) -> &BreakPolicy {
        &self.break_policy
    }
}
