//! The employee registration service.
//!
//! [`EmployeeService`] gatekeeps writes of managers and workers: it runs the
//! registration rules from [`crate::validation`] against each candidate and
//! only forwards records that pass to the [`EmployeeStore`](crate::store::EmployeeStore).
//! Lookups and the merged listing pass straight through to the store.

mod clock;
mod employee_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use employee_service::EmployeeService;
