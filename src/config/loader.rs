//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PersonnelError, PersonnelResult};

use super::types::{RegistrationRules, ServerConfig, ServiceConfig};

/// Loads and provides access to the service configuration.
///
/// # File Layout
///
/// ```text
/// rules:
///   min_hire_year: 1920
///   hire_horizon_months: 3
///   name_pattern: "^\\p{Lu}\\p{L}*(?:[ -]\\p{L}+)*$"
/// server:
///   bind: "127.0.0.1:8080"
/// ```
///
/// # Example
///
/// ```no_run
/// use personnel_manager::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/registration.yaml")?;
/// println!("Minimum hire year: {}", loader.rules().min_hire_year);
/// # Ok::<(), personnel_manager::error::PersonnelError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`ServiceConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> PersonnelResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PersonnelError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        Ok(Self { config })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> PersonnelResult<Self> {
        let config = Self::parse(content, "<inline>")?;
        Ok(Self { config })
    }

    fn parse(content: &str, origin: &str) -> PersonnelResult<ServiceConfig> {
        // An empty document deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(ServiceConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| PersonnelError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the registration rule parameters.
    pub fn rules(&self) -> &RegistrationRules {
        &self.config.rules
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}
