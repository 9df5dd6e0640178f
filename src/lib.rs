//! Personnel record management for salaried and hourly employees.
//!
//! This crate registers managers ("cadres") and workers ("ouvriers") after
//! checking them against a configurable rule set, and exposes lookups and a
//! merged, name-sorted listing over a pluggable store.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;
