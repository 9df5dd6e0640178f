//! Salary statement shapes.
//!
//! These are the result types of the salary-for-month queries. No pay
//! computation exists yet, so nothing in the crate produces them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monthly pay line for a salaried manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salaire {
    /// The manager the line belongs to.
    pub employe_id: Uuid,
    /// First day of the month the line covers.
    pub mois: NaiveDate,
    /// Gross amount for the month.
    pub montant_brut: Decimal,
}

/// A monthly pay line for an hourly worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaireOuvrier {
    /// The worker the line belongs to.
    pub employe_id: Uuid,
    /// First day of the month the line covers.
    pub mois: NaiveDate,
    /// Hours worked during the month.
    pub heures_travaillees: Decimal,
    /// Hourly rate applied.
    pub taux_horaire: Decimal,
    /// Gross amount for the month.
    pub montant_brut: Decimal,
}
