//! Configuration types for the personnel manager.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file yields the stock rule set.

use serde::Deserialize;

/// Hire dates must fall strictly after this year by default.
pub const DEFAULT_MIN_HIRE_YEAR: i32 = 1920;

/// Hire dates must fall strictly before today plus this many months by default.
pub const DEFAULT_HIRE_HORIZON_MONTHS: u32 = 3;

/// Starts with an uppercase letter; letters only, with single spaces or
/// hyphens between letter groups.
///
/// Hyphens and spaces are deliberately allowed so compound names such as
/// "Jean-Pierre" or "Le Goff" register. Every other punctuation mark, digits
/// and symbols are rejected.
pub const DEFAULT_NAME_PATTERN: &str = r"^\p{Lu}\p{L}*(?:[ -]\p{L}+)*$";

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Parameters of the registration rule set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationRules {
    /// Hire years at or below this value are rejected.
    #[serde(default = "default_min_hire_year")]
    pub min_hire_year: i32,
    /// How far ahead of today a hire date may be, in calendar months.
    #[serde(default = "default_hire_horizon_months")]
    pub hire_horizon_months: u32,
    /// Regular expression manager names must match. `null` disables the check.
    #[serde(default = "default_name_pattern")]
    pub name_pattern: Option<String>,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            min_hire_year: DEFAULT_MIN_HIRE_YEAR,
            hire_horizon_months: DEFAULT_HIRE_HORIZON_MONTHS,
            name_pattern: default_name_pattern(),
        }
    }
}

fn default_min_hire_year() -> i32 {
    DEFAULT_MIN_HIRE_YEAR
}

fn default_hire_horizon_months() -> u32 {
    DEFAULT_HIRE_HORIZON_MONTHS
}

fn default_name_pattern() -> Option<String> {
    Some(DEFAULT_NAME_PATTERN.to_string())
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// The complete service configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Registration rule parameters.
    #[serde(default)]
    pub rules: RegistrationRules,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}
