//! Compiled registration policy.

use chrono::{Months, NaiveDate};
use regex::Regex;

use crate::config::RegistrationRules;
use crate::error::{PersonnelError, PersonnelResult};

/// The registration rule parameters, ready to evaluate.
///
/// Built once from [`RegistrationRules`] so the name pattern is compiled a
/// single time rather than on every registration.
///
/// # Example
///
/// ```
/// use personnel_manager::config::RegistrationRules;
/// use personnel_manager::validation::RegistrationPolicy;
///
/// let policy = RegistrationPolicy::from_rules(&RegistrationRules::default())?;
/// assert_eq!(policy.min_hire_year(), 1920);
/// assert!(policy.name_matches("Dupont"));
/// assert!(!policy.name_matches("dupont"));
/// # Ok::<(), personnel_manager::error::PersonnelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RegistrationPolicy {
    min_hire_year: i32,
    hire_horizon_months: u32,
    name_pattern: Option<Regex>,
}

impl RegistrationPolicy {
    /// Compiles the given rule parameters.
    ///
    /// Fails with `InvalidNamePattern` when the configured pattern is not a
    /// valid regular expression.
    pub fn from_rules(rules: &RegistrationRules) -> PersonnelResult<Self> {
        let name_pattern = rules
            .name_pattern
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| PersonnelError::InvalidNamePattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            min_hire_year: rules.min_hire_year,
            hire_horizon_months: rules.hire_horizon_months,
            name_pattern,
        })
    }

    /// Hire years at or below this value are rejected.
    pub fn min_hire_year(&self) -> i32 {
        self.min_hire_year
    }

    /// The hiring horizon in calendar months.
    pub fn hire_horizon_months(&self) -> u32 {
        self.hire_horizon_months
    }

    /// The first date that is too far in the future, relative to `today`.
    ///
    /// Month addition clamps to the last day of the target month, so
    /// 30 November plus 3 months is 28 (or 29) February.
    pub fn hire_horizon(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_months(Months::new(self.hire_horizon_months))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true if the name-shape check is enabled.
    pub fn checks_name_shape(&self) -> bool {
        self.name_pattern.is_some()
    }

    /// Returns true if `name` satisfies the name pattern, or if no pattern
    /// is configured.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name_pattern
            .as_ref()
            .is_none_or(|pattern| pattern.is_match(name))
    }
}

impl Default for RegistrationPolicy {
    /// The stock rule set, with the name-shape check enabled.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_NAME_PATTERN` is not a valid regular expression.
    fn default() -> Self {
        Self::from_rules(&RegistrationRules::default())
            .expect("DEFAULT_NAME_PATTERN is a valid regular expression")
    }
}
