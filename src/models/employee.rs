//! Employee capability trait and the merged employee record.
//!
//! Every employee kind exposes an identity (`nom`, `prenom`) and a hire date
//! through the [`Employee`] trait. [`Employe`] wraps either kind for listings
//! that mix salaried and hourly staff.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cadre, Ouvrier};

/// Fields shared by every employee kind.
pub trait Employee {
    /// Unique identifier of the record.
    fn id(&self) -> Uuid;
    /// Last name.
    fn nom(&self) -> &str;
    /// First name.
    fn prenom(&self) -> &str;
    /// The date the employee was hired.
    fn date_embauche(&self) -> NaiveDate;
}

/// An employee of either kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Employe {
    /// A salaried manager.
    Cadre(Cadre),
    /// An hourly worker.
    Ouvrier(Ouvrier),
}

impl Employe {
    /// Returns true if the employee is a salaried manager.
    pub fn is_cadre(&self) -> bool {
        matches!(self, Employe::Cadre(_))
    }

    fn as_employee(&self) -> &dyn Employee {
        match self {
            Employe::Cadre(cadre) => cadre,
            Employe::Ouvrier(ouvrier) => ouvrier,
        }
    }
}

impl Employee for Employe {
    fn id(&self) -> Uuid {
        self.as_employee().id()
    }

    fn nom(&self) -> &str {
        self.as_employee().nom()
    }

    fn prenom(&self) -> &str {
        self.as_employee().prenom()
    }

    fn date_embauche(&self) -> NaiveDate {
        self.as_employee().date_embauche()
    }
}

impl From<Cadre> for Employe {
    fn from(cadre: Cadre) -> Self {
        Employe::Cadre(cadre)
    }
}

impl From<Ouvrier> for Employe {
    fn from(ouvrier: Ouvrier) -> Self {
        Employe::Ouvrier(ouvrier)
    }
}
