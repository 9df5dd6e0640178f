//! Persistence collaborator contract.
//!
//! The registration service never talks to a database directly. It consumes
//! the [`EmployeeStore`] trait, and whatever backs it decides how records are
//! kept. [`InMemoryStore`] is the implementation shipped with the crate.

mod memory;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Cadre, Ouvrier};

pub use memory::InMemoryStore;

/// Failure reported by a store implementation.
///
/// The service propagates these without interpreting them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or could not complete the operation.
    #[error("storage backend failed: {message}")]
    Backend {
        /// Backend-specific description.
        message: String,
    },
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Lookup and save operations over employee records.
///
/// Implementations must be safe to share across threads; the service holds
/// them behind an `Arc` and may be called from many request handlers at once.
pub trait EmployeeStore: Send + Sync {
    /// Returns every stored worker.
    fn list_all_ouvriers(&self) -> StoreResult<Vec<Ouvrier>>;

    /// Returns every stored manager.
    fn list_all_cadres(&self) -> StoreResult<Vec<Cadre>>;

    /// Looks up a worker by id.
    fn get_ouvrier_by_id(&self, id: Uuid) -> StoreResult<Option<Ouvrier>>;

    /// Looks up a manager by id.
    fn get_cadre_by_id(&self, id: Uuid) -> StoreResult<Option<Cadre>>;

    /// Persists a manager.
    fn save_cadre(&self, cadre: Cadre) -> StoreResult<()>;

    /// Persists a worker.
    fn save_ouvrier(&self, ouvrier: Ouvrier) -> StoreResult<()>;
}
