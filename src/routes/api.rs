use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{
    filter::DateRange,
    models::{summary::TripSummary, trip::TripRecord},
    routes::trips::DateQuery,
    services::trips::TripView,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/trips", get(list_trips))
}

#[derive(Serialize)]
struct TripListResponse {
    range: DateRange,
    trips: Vec<TripRecord>,
    summary: TripSummary,
}

async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<TripListResponse> {
    let range = query.range();
    let TripView { trips, summary } = state.trips.view(&range).await;
    Json(TripListResponse {
        range,
        trips,
        summary,
    })
}
