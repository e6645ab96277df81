//! Rules a trip submission must pass before it reaches the store.
//!
//! Rules run in a fixed order and the first failure wins, so a form with
//! several problems always reports the same one.

use chrono::NaiveDateTime;

use crate::{
    error::ValidationError,
    models::trip::{TripFields, ValidatedTrip},
};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

pub fn validate(fields: &TripFields) -> Result<ValidatedTrip, ValidationError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let start_mileage = parse_mileage(&fields.start_mileage)?;
    let end_mileage = parse_mileage(&fields.end_mileage)?;
    if end_mileage < start_mileage {
        return Err(ValidationError::MileageRegression);
    }

    let start_date_time = parse_date_time(&fields.start_date_time)?;
    let end_date_time = parse_date_time(&fields.end_date_time)?;
    if end_date_time < start_date_time {
        return Err(ValidationError::TimeRegression);
    }

    Ok(ValidatedTrip {
        name: name.to_string(),
        start_date_time,
        start_location: fields.start_location.trim().to_string(),
        start_mileage,
        end_date_time,
        end_location: fields.end_location.trim().to_string(),
        end_mileage,
    })
}

fn parse_mileage(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidMileage),
    }
}

pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    let raw = raw.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or(ValidationError::InvalidDateTime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> TripFields {
        TripFields {
            name: "  client visit ".into(),
            start_date_time: "2024-05-02T08:30".into(),
            start_location: " office ".into(),
            start_mileage: "100".into(),
            end_date_time: "2024-05-02T10:15".into(),
            end_location: "client".into(),
            end_mileage: "150.5".into(),
        }
    }

    #[test]
    fn accepts_and_trims_a_valid_trip() {
        let trip = validate(&fields()).expect("valid");
        assert_eq!(trip.name, "client visit");
        assert_eq!(trip.start_location, "office");
        assert_eq!(trip.distance(), 50.5);
    }

    #[test]
    fn whitespace_name_is_empty() {
        let mut input = fields();
        input.name = "   ".into();
        assert_eq!(validate(&input), Err(ValidationError::EmptyName));
    }

    #[test]
    fn rejects_unparseable_and_negative_mileage() {
        for bad in ["", "abc", "NaN", "inf", "-1"] {
            let mut input = fields();
            input.end_mileage = bad.into();
            assert_eq!(validate(&input), Err(ValidationError::InvalidMileage), "{bad}");
        }
    }

    #[test]
    fn end_mileage_below_start_is_a_regression() {
        let mut input = fields();
        input.end_mileage = "99.9".into();
        assert_eq!(validate(&input), Err(ValidationError::MileageRegression));
    }

    #[test]
    fn equal_mileage_is_allowed() {
        let mut input = fields();
        input.end_mileage = "100".into();
        assert_eq!(validate(&input).expect("valid").distance(), 0.0);
    }

    #[test]
    fn arrival_before_departure_is_a_regression() {
        let mut input = fields();
        input.end_date_time = "2024-05-02T08:29".into();
        assert_eq!(validate(&input), Err(ValidationError::TimeRegression));
    }

    #[test]
    fn rejects_garbage_dates() {
        let mut input = fields();
        input.start_date_time = "yesterday".into();
        assert_eq!(validate(&input), Err(ValidationError::InvalidDateTime));
    }

    #[test]
    fn accepts_seconds_and_space_separator() {
        let mut input = fields();
        input.start_date_time = "2024-05-02 08:30:00".into();
        input.end_date_time = "2024-05-02T10:15:30".into();
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn first_failing_rule_wins() {
        let input = TripFields {
            name: String::new(),
            end_mileage: "-5".into(),
            end_date_time: "nope".into(),
            ..fields()
        };
        assert_eq!(validate(&input), Err(ValidationError::EmptyName));

        let input = TripFields {
            end_mileage: "1".into(),
            end_date_time: "2000-01-01T00:00".into(),
            ..fields()
        };
        assert_eq!(validate(&input), Err(ValidationError::MileageRegression));
    }
}
