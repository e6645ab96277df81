use serde::Serialize;

use super::trip::TripRecord;

/// Aggregates shown above the trip table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripSummary {
    pub count: usize,
    pub total_distance: f64,
    /// `None` for an empty list.
    pub average_distance: Option<f64>,
}

impl TripSummary {
    pub fn of(records: &[TripRecord]) -> Self {
        let count = records.len();
        let total_distance = records.iter().map(TripRecord::distance).sum::<f64>();
        let average_distance = (count > 0).then(|| total_distance / count as f64);
        Self {
            count,
            total_distance,
            average_distance,
        }
    }
}
