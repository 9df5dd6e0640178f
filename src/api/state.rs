//! Application state for the personnel manager API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::service::EmployeeService;

/// Shared application state.
///
/// Wraps the registration service. The service is itself cheap to clone,
/// so handlers receive their own copy.
#[derive(Clone)]
pub struct AppState {
    service: EmployeeService,
}

impl AppState {
    /// Creates a new application state around the given service.
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }

    /// Returns the registration service.
    pub fn service(&self) -> &EmployeeService {
        &self.service
    }
}
