//! Hourly worker record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Employee;

/// An hourly worker ("ouvrier").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ouvrier {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// Last name.
    pub nom: String,
    /// First name.
    pub prenom: String,
    /// The date the worker was hired.
    pub date_embauche: NaiveDate,
    /// Hourly pay rate.
    pub taux_horaire: Decimal,
}

impl Ouvrier {
    /// Creates a worker record with a freshly generated id.
    pub fn new(
        nom: impl Into<String>,
        prenom: impl Into<String>,
        date_embauche: NaiveDate,
        taux_horaire: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            nom: nom.into(),
            prenom: prenom.into(),
            date_embauche,
            taux_horaire,
        }
    }
}

impl Employee for Ouvrier {
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
