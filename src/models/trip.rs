use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw trip values as they arrive from the form, before any parsing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TripFields {
    pub name: String,
    pub start_date_time: String,
    pub start_location: String,
    pub start_mileage: String,
    pub end_date_time: String,
    pub end_location: String,
    pub end_mileage: String,
}

/// A submission that passed every validation rule. Only
/// [`crate::validation::validate`] produces one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTrip {
    pub(crate) name: String,
    pub(crate) start_date_time: NaiveDateTime,
    pub(crate) start_location: String,
    pub(crate) start_mileage: f64,
    pub(crate) end_date_time: NaiveDateTime,
    pub(crate) end_location: String,
    pub(crate) end_mileage: f64,
}

impl ValidatedTrip {
    pub fn distance(&self) -> f64 {
        self.end_mileage - self.start_mileage
    }
}

/// One logged vehicle trip. `distance` is derived from the mileages whenever
/// the record is built or replaced and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    id: Uuid,
    name: String,
    start_date_time: NaiveDateTime,
    start_location: String,
    start_mileage: f64,
    end_date_time: NaiveDateTime,
    end_location: String,
    end_mileage: f64,
    distance: f64,
}

impl TripRecord {
    pub fn new(id: Uuid, trip: ValidatedTrip) -> Self {
        let distance = trip.distance();
        Self {
            id,
            name: trip.name,
            start_date_time: trip.start_date_time,
            start_location: trip.start_location,
            start_mileage: trip.start_mileage,
            end_date_time: trip.end_date_time,
            end_location: trip.end_location,
            end_mileage: trip.end_mileage,
            distance,
        }
    }

    /// Same id, new field values.
    pub fn replaced(&self, trip: ValidatedTrip) -> Self {
        Self::new(self.id, trip)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date_time(&self) -> NaiveDateTime {
        self.start_date_time
    }

    pub fn start_location(&self) -> &str {
        &self.start_location
    }

    pub fn start_mileage(&self) -> f64 {
        self.start_mileage
    }

    pub fn end_date_time(&self) -> NaiveDateTime {
        self.end_date_time
    }

    pub fn end_location(&self) -> &str {
        &self.end_location
    }

    pub fn end_mileage(&self) -> f64 {
        self.end_mileage
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Field values in the shape the form submits them, for editing.
    pub fn to_fields(&self) -> TripFields {
        TripFields {
            name: self.name.clone(),
            start_date_time: self.start_date_time.format(FORM_DATE_TIME).to_string(),
            start_location: self.start_location.clone(),
            start_mileage: self.start_mileage.to_string(),
            end_date_time: self.end_date_time.format(FORM_DATE_TIME).to_string(),
            end_location: self.end_location.clone(),
            end_mileage: self.end_mileage.to_string(),
        }
    }
}

/// `datetime-local` input format.
pub const FORM_DATE_TIME: &str = "%Y-%m-%dT%H:%M";
