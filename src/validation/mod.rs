//! Registration rules for employee records.
//!
//! Each rule is a standalone check that either passes or returns a
//! [`PersonnelError::BusinessRuleViolation`](crate::error::PersonnelError)
//! tagged with the [`BusinessRule`] that failed. The service runs them in a
//! fixed order and stops at the first failure.

mod policy;
mod rules;

pub use policy::RegistrationPolicy;
pub use rules::{
    BusinessRule, check_hire_date, check_hourly_rate, check_identity, check_monthly_salary,
    check_name_shape,
};
