//! Configuration loading and management for the personnel manager.
//!
//! This module loads the registration rule parameters and server settings
//! from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use personnel_manager::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/registration.yaml").unwrap();
//! println!("Listening on {}", config.server().bind);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_BIND, DEFAULT_HIRE_HORIZON_MONTHS, DEFAULT_MIN_HIRE_YEAR, DEFAULT_NAME_PATTERN,
    RegistrationRules, ServerConfig, ServiceConfig,
};
