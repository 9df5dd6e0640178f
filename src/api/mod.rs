//! HTTP API module for the personnel manager.
//!
//! This module exposes the registration service as JSON endpoints for
//! registering managers and workers, looking them up and listing them.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CadreRequest, MonthQuery, NameQuery, OuvrierRequest};
pub use response::{ApiError, ApiErrorResponse, RegistrationResponse};
pub use state::AppState;
