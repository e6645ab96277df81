use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Why a submitted trip was rejected. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a name for the trip")]
    EmptyName,
    #[error("mileage must be a non-negative number")]
    InvalidMileage,
    #[error("end mileage must not be lower than start mileage")]
    MileageRegression,
    #[error("start and end time must be valid dates")]
    InvalidDateTime,
    #[error("arrival time must not be before departure time")]
    TimeRegression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TripError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("trip not found")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Trip(#[from] TripError),
    #[error("not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Config(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Trip(TripError::NotFound) | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Trip(TripError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_errors_map_to_status_codes() {
        let not_found = AppError::from(TripError::NotFound).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = AppError::from(TripError::from(ValidationError::EmptyName)).into_response();
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let config = AppError::Config("nope".into()).into_response();
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_message_passes_through() {
        let err = TripError::from(ValidationError::MileageRegression);
        assert_eq!(
            err.to_string(),
            "end mileage must not be lower than start mileage"
        );
    }
}
