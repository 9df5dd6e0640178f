//! Individual registration rules.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PersonnelError, PersonnelResult};
use crate::models::Employee;

use super::RegistrationPolicy;

/// Identifies which registration rule rejected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessRule {
    /// Last name or first name is empty.
    MissingName,
    /// Hire year is at or before the minimum hire year.
    HireYear,
    /// Hire date is at or beyond the hiring horizon.
    HireHorizon,
    /// A manager's monthly salary is below zero.
    NegativeSalary,
    /// A worker's hourly rate is zero or below.
    NonPositiveHourlyRate,
    /// Last name or first name does not match the name pattern.
    NameShape,
}

impl BusinessRule {
    /// Stable machine-readable code for the rule.
    ///
    /// ```
    /// use personnel_manager::validation::BusinessRule;
    ///
    /// assert_eq!(BusinessRule::HireHorizon.code(), "HIRE_HORIZON");
    /// ```
    pub fn code(self) -> &'static str {
        match self {
            BusinessRule::MissingName => "MISSING_NAME",
            BusinessRule::HireYear => "HIRE_YEAR",
            BusinessRule::HireHorizon => "HIRE_HORIZON",
            BusinessRule::NegativeSalary => "NEGATIVE_SALARY",
            BusinessRule::NonPositiveHourlyRate => "NON_POSITIVE_HOURLY_RATE",
            BusinessRule::NameShape => "NAME_SHAPE",
        }
    }
}

/// Rejects a candidate whose last name or first name is empty.
pub fn check_identity<E: Employee + ?Sized>(candidate: &E) -> PersonnelResult<()> {
    if candidate.nom().is_empty() || candidate.prenom().is_empty() {
        return Err(PersonnelError::violation(
            BusinessRule::MissingName,
            "name and first name are required",
        ));
    }
    Ok(())
}

/// Checks the hire date against the minimum year and the hiring horizon.
///
/// The year check runs first. The horizon is exclusive: a hire date equal to
/// `today` plus the horizon is rejected, the day before is accepted.
///
/// # Examples
///
/// ```
/// use personnel_manager::validation::{check_hire_date, RegistrationPolicy};
/// use chrono::NaiveDate;
///
/// let policy = RegistrationPolicy::default();
/// let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
///
/// assert!(check_hire_date(NaiveDate::from_ymd_opt(2027, 1, 13).unwrap(), today, &policy).is_ok());
/// assert!(check_hire_date(NaiveDate::from_ymd_opt(2027, 1, 14).unwrap(), today, &policy).is_err());
/// ```
pub fn check_hire_date(
    date_embauche: NaiveDate,
    today: NaiveDate,
    policy: &RegistrationPolicy,
) -> PersonnelResult<()> {
    if date_embauche.year() <= policy.min_hire_year() {
        return Err(PersonnelError::violation(
            BusinessRule::HireYear,
            format!("hire date must be after {}", policy.min_hire_year()),
        ));
    }

    if date_embauche >= policy.hire_horizon(today) {
        return Err(PersonnelError::violation(
            BusinessRule::HireHorizon,
            format!(
                "hire date must not be more than {} months in the future",
                policy.hire_horizon_months()
            ),
        ));
    }

    Ok(())
}

/// Rejects a negative monthly salary. Zero is allowed.
pub fn check_monthly_salary(salaire_mensuel: Decimal) -> PersonnelResult<()> {
    if salaire_mensuel < Decimal::ZERO {
        return Err(PersonnelError::violation(
            BusinessRule::NegativeSalary,
            "a manager's salary cannot be negative",
        ));
    }
    Ok(())
}

/// Rejects an hourly rate of zero or below.
pub fn check_hourly_rate(taux_horaire: Decimal) -> PersonnelResult<()> {
    if taux_horaire <= Decimal::ZERO {
        return Err(PersonnelError::violation(
            BusinessRule::NonPositiveHourlyRate,
            "a worker's hourly rate cannot be negative",
        ));
    }
    Ok(())
}

/// Rejects a candidate whose names do not match the policy's name pattern.
///
/// Passes unconditionally when the policy has no pattern.
pub fn check_name_shape<E: Employee + ?Sized>(
    candidate: &E,
    policy: &RegistrationPolicy,
) -> PersonnelResult<()> {
    if !policy.name_matches(candidate.nom()) || !policy.name_matches(candidate.prenom()) {
        return Err(PersonnelError::violation(
            BusinessRule::NameShape,
            "name/first name must not contain special characters",
        ));
    }
    Ok(())
}
