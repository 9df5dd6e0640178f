//! Request types for the personnel manager API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! registration and lookup endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Cadre, Ouvrier};

/// Request body for `POST /cadres`.
///
/// Missing names deserialize as empty strings so the registration rules,
/// not the JSON layer, report them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadreRequest {
    /// Last name.
    #[serde(default)]
    pub nom: String,
    /// First name.
    #[serde(default)]
    pub prenom: String,
    /// The hire date.
    pub date_embauche: NaiveDate,
    /// Gross monthly salary.
    pub salaire_mensuel: Decimal,
}

/// Request body for `POST /ouvriers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OuvrierRequest {
    /// Last name.
    #[serde(default)]
    pub nom: String,
    /// First name.
    #[serde(default)]
    pub prenom: String,
    /// The hire date.
    pub date_embauche: NaiveDate,
    /// Hourly pay rate.
    pub taux_horaire: Decimal,
}

/// Query string for `GET /ouvriers`.
#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    /// Exact last name to look for.
    pub nom: String,
}

/// Query string for the salary endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthQuery {
    /// Any date within the requested month.
    pub mois: NaiveDate,
}

impl From<CadreRequest> for Cadre {
    fn from(req: CadreRequest) -> Self {
        Cadre::new(req.nom, req.prenom, req.date_embauche, req.salaire_mensuel)
    }
}

impl From<OuvrierRequest> for Ouvrier {
    fn from(req: OuvrierRequest) -> Self {
        Ouvrier::new(req.nom, req.prenom, req.date_embauche, req.taux_horaire)
    }
}
