//! Date-bounded views over the trip log.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::trip::TripRecord;

/// Inclusive bounds on a trip's departure time. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// Whole-day bounds: the start date from midnight, the end date until
    /// 23:59:59.
    pub fn from_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start: start.and_then(|date| date.and_hms_opt(0, 0, 0)),
            end: end.and_then(|date| date.and_hms_opt(23, 59, 59)),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start.map_or(true, |start| at >= start) && self.end.map_or(true, |end| at <= end)
    }
}

/// Records whose departure lies within `range`, in their original order.
pub fn filter_trips(records: &[TripRecord], range: &DateRange) -> Vec<TripRecord> {
    if range.is_unbounded() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| range.contains(record.start_date_time()))
        .cloned()
        .collect()
}
