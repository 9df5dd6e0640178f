//! In-memory store backed by insertion-ordered maps.

use indexmap::IndexMap;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::{Cadre, Ouvrier};

use super::{EmployeeStore, StoreResult};

#[derive(Debug, Default)]
struct Records {
    cadres: IndexMap<Uuid, Cadre>,
    ouvriers: IndexMap<Uuid, Ouvrier>,
}

/// An [`EmployeeStore`] that keeps records in process memory.
///
/// Listings come back in insertion order. Saving a record whose id is
/// already present replaces it in place.
///
/// # Example
///
/// ```
/// use personnel_manager::models::Cadre;
/// use personnel_manager::store::{EmployeeStore, InMemoryStore};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new();
/// let cadre = Cadre::new(
///     "Dupont",
///     "Gerard",
///     NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
///     Decimal::new(1500, 0),
/// );
/// store.save_cadre(cadre.clone())?;
/// assert_eq!(store.get_cadre_by_id(cadre.id)?, Some(cadre));
/// # Ok::<(), personnel_manager::store::StoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Records>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of stored records of both kinds.
    pub fn len(&self) -> usize {
        let records = self.records.read();
        records.cadres.len() + records.ouvriers.len()
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EmployeeStore for InMemoryStore {
    fn list_all_ouvriers(&self) -> StoreResult<Vec<Ouvrier>> {
        Ok(self.records.read().ouvriers.values().cloned().collect())
    }

    fn list_all_cadres(&self) -> StoreResult<Vec<Cadre>> {
        Ok(self.records.read().cadres.values().cloned().collect())
    }

    fn get_ouvrier_by_id(&self, id: Uuid) -> StoreResult<Option<Ouvrier>> {
        Ok(self.records.read().ouvriers.get(&id).cloned())
    }

    fn get_cadre_by_id(&self, id: Uuid) -> StoreResult<Option<Cadre>> {
        Ok(self.records.read().cadres.get(&id).cloned())
    }

    fn save_cadre(&self, cadre: Cadre) -> StoreResult<()> {
        self.records.write().cadres.insert(cadre.id, cadre);
        Ok(())
    }

    fn save_ouvrier(&self, ouvrier: Ouvrier) -> StoreResult<()> {
        self.records.write().ouvriers.insert(ouvrier.id, ouvrier);
        Ok(())
    }
}
