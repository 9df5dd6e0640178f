//! Salaried manager record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Employee;

/// A salaried manager ("cadre").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cadre {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// Last name.
    pub nom: String,
    /// First name.
    pub prenom: String,
    /// The date the manager was hired.
    pub date_embauche: NaiveDate,
    /// Gross monthly salary.
    pub salaire_mensuel: Decimal,
}

impl Cadre {
    /// Creates a manager record with a freshly generated id.
    ///
    /// # Examples
    ///
    /// ```
    /// use personnel_manager::models::Cadre;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let cadre = Cadre::new(
    ///     "Dupont",
    ///     "Gerard",
    ///     NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
    ///     Decimal::new(1500, 0),
    /// );
    /// assert_eq!(cadre.nom, "Dupont");
    /// ```
    pub fn new(
        nom: impl Into<String>,
        prenom: impl Into<String>,
        date_embauche: NaiveDate,
        salaire_mensuel: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            nom: nom.into(),
            prenom: prenom.into(),
            date_embauche,
            salaire_mensuel,
        }
    }
}

impl Employee for Cadre {
    fn id(&self) -> Uuid {
        self.id
    }

    fn nom(&self) -> &str {
        &self.nom
    }

    fn prenom(&self) -> &str {
        &self.prenom
    }

    fn date_embauche(&self) -> NaiveDate {
        self.date_embauche
    }
}
