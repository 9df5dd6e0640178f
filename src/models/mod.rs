//! Core data models for the personnel manager.
//!
//! This module contains the employee records handled by the registration
//! service and the salary statement shapes returned by its salary queries.

mod cadre;
mod employee;
mod ouvrier;
mod salary;

pub use cadre::Cadre;
pub use employee::{Employe, Employee};
pub use ouvrier::Ouvrier;
pub use salary::{Salaire, SalaireOuvrier};
