use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::TripError,
    models::trip::{TripFields, TripRecord},
    validation::validate,
};

/// In-memory trip log, kept in insertion order.
///
/// Snapshots handed out by [`TripStore::list`] share storage with the store
/// until the next write, which copies the collection if any snapshot is still
/// alive. A snapshot therefore never changes underneath its holder.
#[derive(Debug, Clone, Default)]
pub struct TripStore {
    records: Arc<Vec<TripRecord>>,
}

impl TripStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, fields: &TripFields) -> Result<TripRecord, TripError> {
        let trip = validate(fields)?;
        let record = TripRecord::new(self.fresh_id(), trip);
        Arc::make_mut(&mut self.records).push(record.clone());
        Ok(record)
    }

    pub fn update(&mut self, id: Uuid, fields: &TripFields) -> Result<TripRecord, TripError> {
        let position = self.position(id).ok_or(TripError::NotFound)?;
        let trip = validate(fields)?;
        let records = Arc::make_mut(&mut self.records);
        let updated = records[position].replaced(trip);
        records[position] = updated.clone();
        Ok(updated)
    }

    pub fn remove(&mut self, id: Uuid) -> Result<TripRecord, TripError> {
        let position = self.position(id).ok_or(TripError::NotFound)?;
        Ok(Arc::make_mut(&mut self.records).remove(position))
    }

    pub fn get(&self, id: Uuid) -> Option<&TripRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn list(&self) -> Arc<Vec<TripRecord>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    // Ids are never reused within one log.
    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.position(id).is_none() {
                return id;
            }
        }
    }
}
