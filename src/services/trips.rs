use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::TripError,
    filter::{filter_trips, DateRange},
    models::{
        summary::TripSummary,
        trip::{TripFields, TripRecord},
    },
    services::store::TripStore,
};

/// A filtered slice of the log together with its aggregates.
#[derive(Debug, Clone)]
pub struct TripView {
    pub trips: Vec<TripRecord>,
    pub summary: TripSummary,
}

/// Shared handle to the session's trip log. Writes are serialised through a
/// single lock.
#[derive(Debug, Clone, Default)]
pub struct TripService {
    store: Arc<Mutex<TripStore>>,
}

impl TripService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, fields: &TripFields) -> Result<TripRecord, TripError> {
        let mut store = self.store.lock().await;
        match store.add(fields) {
            Ok(record) => {
                info!(id = %record.id(), distance = record.distance(), "trip added");
                Ok(record)
            }
            Err(err) => {
                warn!("rejected new trip: {err}");
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: Uuid, fields: &TripFields) -> Result<TripRecord, TripError> {
        let mut store = self.store.lock().await;
        match store.update(id, fields) {
            Ok(record) => {
                info!(%id, distance = record.distance(), "trip updated");
                Ok(record)
            }
            Err(err) => {
                warn!(%id, "rejected trip update: {err}");
                Err(err)
            }
        }
    }

    pub async fn remove(&self, id: Uuid) -> Result<TripRecord, TripError> {
        let removed = self.store.lock().await.remove(id);
        match &removed {
            Ok(_) => info!(%id, "trip removed"),
            Err(err) => warn!(%id, "could not remove trip: {err}"),
        }
        removed
    }

    pub async fn get(&self, id: Uuid) -> Option<TripRecord> {
        self.store.lock().await.get(id).cloned()
    }

    pub async fn list(&self) -> Arc<Vec<TripRecord>> {
        self.store.lock().await.list()
    }

    pub async fn view(&self, range: &DateRange) -> TripView {
        let snapshot = self.list().await;
        let trips = filter_trips(&snapshot, range);
        let summary = TripSummary::of(&trips);
        TripView { trips, summary }
    }
}
