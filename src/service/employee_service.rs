//! Registration, lookup and listing of employees.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{PersonnelError, PersonnelResult};
use crate::models::{Cadre, Employe, Employee, Ouvrier, Salaire, SalaireOuvrier};
use crate::store::EmployeeStore;
use crate::validation::{
    RegistrationPolicy, check_hire_date, check_hourly_rate, check_identity, check_monthly_salary,
    check_name_shape,
};

use super::clock::{Clock, SystemClock};

/// Validates candidate records and delegates persistence to a store.
///
/// The service holds no records of its own. Cloning it is cheap and every
/// clone shares the same store and clock.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use personnel_manager::models::Cadre;
/// use personnel_manager::service::EmployeeService;
/// use personnel_manager::store::InMemoryStore;
/// use personnel_manager::validation::RegistrationPolicy;
/// use chrono::Local;
/// use rust_decimal::Decimal;
///
/// let service = EmployeeService::new(
///     Arc::new(InMemoryStore::new()),
///     RegistrationPolicy::default(),
/// );
///
/// let cadre = Cadre::new("Dupont", "Gerard", Local::now().date_naive(), Decimal::new(1500, 0));
/// service.register_cadre(Some(cadre))?;
/// assert_eq!(service.list_employees()?.len(), 1);
/// # Ok::<(), personnel_manager::error::PersonnelError>(())
/// ```
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    clock: Arc<dyn Clock>,
    policy: RegistrationPolicy,
}

impl EmployeeService {
    /// Creates a service over `store` that reads today's date from the system clock.
    pub fn new(store: Arc<dyn EmployeeStore>, policy: RegistrationPolicy) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            policy,
        }
    }

    /// Replaces the clock used for date-relative rules.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns the registration policy in force.
    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Returns the first worker whose last name equals `nom` exactly.
    pub fn find_ouvrier_by_name(&self, nom: &str) -> PersonnelResult<Option<Ouvrier>> {
        let ouvriers = self.store.list_all_ouvriers()?;
        Ok(ouvriers.into_iter().find(|o| o.nom == nom))
    }

    /// Looks up a worker by id.
    pub fn find_ouvrier_by_id(&self, id: Uuid) -> PersonnelResult<Option<Ouvrier>> {
        Ok(self.store.get_ouvrier_by_id(id)?)
    }

    /// Looks up a manager by id.
    pub fn find_cadre_by_id(&self, id: Uuid) -> PersonnelResult<Option<Cadre>> {
        Ok(self.store.get_cadre_by_id(id)?)
    }

    /// Validates a manager and saves it.
    ///
    /// Rules run in this order and the first failure is returned:
    /// 1. the candidate must be present (`InvalidArgument`)
    /// 2. hire year is after the minimum hire year
    /// 3. hire date is before today plus the hiring horizon
    /// 4. monthly salary is not negative
    /// 5. last name and first name are non-empty
    /// 6. both names match the name pattern, when one is configured
    ///
    /// The store is only called once every rule has passed.
    pub fn register_cadre(&self, candidate: Option<Cadre>) -> PersonnelResult<()> {
        let cadre = candidate.ok_or_else(|| PersonnelError::InvalidArgument {
            message: "a cadre is required".to_string(),
        })?;

        self.validate_cadre(&cadre).inspect_err(|e| {
            debug!(
                employee_id = %cadre.id,
                rule = e.rule().map(|r| r.code()),
                error = %e,
                "Rejected cadre registration"
            );
        })?;

        let id = cadre.id;
        self.store.save_cadre(cadre)?;
        info!(employee_id = %id, "Registered cadre");
        Ok(())
    }

    /// Validates a worker and saves it.
    ///
    /// Rules run in this order and the first failure is returned:
    /// 1. the candidate must be present (`InvalidArgument`)
    /// 2. hourly rate is strictly positive
    /// 3. hire year is after the minimum hire year
    /// 4. hire date is before today plus the hiring horizon
    /// 5. last name and first name are non-empty
    ///
    /// Workers are not subject to the name pattern.
    pub fn register_ouvrier(&self, candidate: Option<Ouvrier>) -> PersonnelResult<()> {
        let ouvrier = candidate.ok_or_else(|| PersonnelError::InvalidArgument {
            message: "an ouvrier is required".to_string(),
        })?;

        self.validate_ouvrier(&ouvrier).inspect_err(|e| {
            debug!(
                employee_id = %ouvrier.id,
                rule = e.rule().map(|r| r.code()),
                error = %e,
                "Rejected ouvrier registration"
            );
        })?;

        let id = ouvrier.id;
        self.store.save_ouvrier(ouvrier)?;
        info!(employee_id = %id, "Registered ouvrier");
        Ok(())
    }

    /// Returns every employee, sorted by last name then first name.
    ///
    /// Workers are collected before managers, and the sort is stable, so two
    /// employees with identical names keep that relative order. Names compare
    /// by code point.
    pub fn list_employees(&self) -> PersonnelResult<Vec<Employe>> {
        let mut employes: Vec<Employe> = self
            .store
            .list_all_ouvriers()?
            .into_iter()
            .map(Employe::from)
            .collect();
        employes.extend(self.store.list_all_cadres()?.into_iter().map(Employe::from));

        employes.sort_by(|a, b| {
            a.nom()
                .cmp(b.nom())
                .then_with(|| a.prenom().cmp(b.prenom()))
        });
        Ok(employes)
    }

    /// Pay statement of a worker for the month containing `mois`.
    ///
    /// Not implemented: always returns `NotSupported`.
    pub fn ouvrier_salary_for_month(
        &self,
        id: Uuid,
        mois: NaiveDate,
    ) -> PersonnelResult<Vec<SalaireOuvrier>> {
        debug!(employee_id = %id, mois = %mois, "Ouvrier salary requested");
        Err(PersonnelError::NotSupported {
            operation: "ouvrier salary for month".to_string(),
        })
    }

    /// Pay statement of a manager for the month containing `mois`.
    ///
    /// Not implemented: always returns `NotSupported`.
    pub fn cadre_salary_for_month(&self, id: Uuid, mois: NaiveDate) -> PersonnelResult<Vec<Salaire>> {
        debug!(employee_id = %id, mois = %mois, "Cadre salary requested");
        Err(PersonnelError::NotSupported {
            operation: "cadre salary for month".to_string(),
        })
    }

    fn validate_cadre(&self, cadre: &Cadre) -> PersonnelResult<()> {
        check_hire_date(cadre.date_embauche, self.clock.today(), &self.policy)?;
        check_monthly_salary(cadre.salaire_mensuel)?;
        check_identity(cadre)?;
        check_name_shape(cadre, &self.policy)
    }

    fn validate_ouvrier(&self, ouvrier: &Ouvrier) -> PersonnelResult<()> {
        check_hourly_rate(ouvrier.taux_horaire)?;
        check_hire_date(ouvrier.date_embauche, self.clock.today(), &self.policy)?;
        check_identity(ouvrier)
    }
}
