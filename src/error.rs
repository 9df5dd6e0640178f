//! Error types for the personnel manager.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a registration, lookup or configuration load can produce.

use thiserror::Error;

use crate::store::StoreError;
use crate::validation::BusinessRule;

/// The main error type for the personnel manager.
///
/// All service operations return this error type. Business rule violations
/// carry the rule that failed as well as the human-readable message.
///
/// # Example
///
/// ```
/// use personnel_manager::error::PersonnelError;
/// use personnel_manager::validation::BusinessRule;
///
/// let error = PersonnelError::violation(
///     BusinessRule::NegativeSalary,
///     "a manager's salary cannot be negative",
/// );
/// assert_eq!(error.to_string(), "a manager's salary cannot be negative");
/// ```
#[derive(Debug, Error)]
pub enum PersonnelError {
    /// A required argument was absent.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// A description of the missing argument.
        message: String,
    },

    /// A candidate record broke a registration rule.
    #[error("{message}")]
    BusinessRuleViolation {
        /// The rule that rejected the candidate.
        rule: BusinessRule,
        /// The message identifying the failed invariant.
        message: String,
    },

    /// The operation exists in the API but has no implementation.
    #[error("Operation not supported: {operation}")]
    NotSupported {
        /// The name of the unsupported operation.
        operation: String,
    },

    /// The persistence collaborator failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured name pattern is not a valid regular expression.
    #[error("Invalid name pattern '{pattern}': {message}")]
    InvalidNamePattern {
        /// The pattern as written in the configuration.
        pattern: String,
        /// The compiler's description of the problem.
        message: String,
    },
}

impl PersonnelError {
    /// Builds a [`PersonnelError::BusinessRuleViolation`].
    pub fn violation(rule: BusinessRule, message: impl Into<String>) -> Self {
        Self::BusinessRuleViolation {
            rule,
            message: message.into(),
        }
    }

    /// Returns the violated rule, if this error is a rule violation.
    pub fn rule(&self) -> Option<BusinessRule> {
        match self {
            Self::BusinessRuleViolation { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}

/// A type alias for Results that return PersonnelError.
pub type PersonnelResult<T> = Result<T, PersonnelError>;
