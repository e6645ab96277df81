use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString};
use uuid::Uuid;

use crate::{
    error::{AppError, TripError},
    filter::DateRange,
    models::trip::{TripFields, TripRecord},
    services::trips::TripView,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/trips", post(create_trip))
        .route("/trips/:id", post(update_trip))
        .route("/trips/:id/delete", post(delete_trip))
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl DateQuery {
    pub fn range(&self) -> DateRange {
        DateRange::from_dates(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Notice {
    Added,
    Updated,
    Deleted,
}

impl Notice {
    fn message(self) -> &'static str {
        match self {
            Notice::Added => "Trip saved.",
            Notice::Updated => "Trip updated.",
            Notice::Deleted => "Trip deleted.",
        }
    }
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(flatten)]
    dates: DateQuery,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    edit: Option<Uuid>,
    #[serde(default)]
    notice: Option<Notice>,
}

#[derive(Template)]
#[template(path = "trips/index.html")]
struct TripsPageTemplate {
    form: FormView,
    show_error: bool,
    error_message: String,
    show_notice: bool,
    notice_message: String,
    filter_start: String,
    filter_end: String,
    filter_active: bool,
    rows: Vec<TripRow>,
    count: usize,
    total_text: String,
    has_average: bool,
    average_text: String,
    unit: String,
}

struct FormView {
    action: String,
    editing: bool,
    fields: TripFields,
}

impl FormView {
    fn create(fields: TripFields) -> Self {
        Self {
            action: "/trips".into(),
            editing: false,
            fields,
        }
    }

    fn edit(id: Uuid, fields: TripFields) -> Self {
        Self {
            action: format!("/trips/{id}"),
            editing: true,
            fields,
        }
    }
}

struct TripRow {
    id: String,
    name: String,
    start_date_time: String,
    start_location: String,
    start_mileage: String,
    end_date_time: String,
    end_location: String,
    end_mileage: String,
    distance: String,
}

impl From<&TripRecord> for TripRow {
    fn from(record: &TripRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            start_date_time: format_timestamp(record.start_date_time()),
            start_location: record.start_location().to_string(),
            start_mileage: format_number(record.start_mileage()),
            end_date_time: format_timestamp(record.end_date_time()),
            end_location: record.end_location().to_string(),
            end_mileage: format_number(record.end_mileage()),
            distance: format_number(record.distance()),
        }
    }
}

struct PageMessages {
    error: Option<String>,
    notice: Option<Notice>,
}

async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let form = match query.edit {
        Some(id) => {
            let record = state.trips.get(id).await.ok_or(AppError::NotFound)?;
            FormView::edit(id, record.to_fields())
        }
        None => FormView::create(TripFields::default()),
    };
    let messages = PageMessages {
        error: None,
        notice: query.notice,
    };
    Ok(render_page(&state, &query.dates, form, messages).await)
}

async fn create_trip(
    State(state): State<AppState>,
    Form(fields): Form<TripFields>,
) -> Result<Response, AppError> {
    match state.trips.add(&fields).await {
        Ok(_) => Ok(Redirect::to("/?notice=added").into_response()),
        Err(TripError::Invalid(err)) => {
            Ok(render_rejected(&state, FormView::create(fields), err.to_string()).await)
        }
        Err(err) => Err(err.into()),
    }
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(fields): Form<TripFields>,
) -> Result<Response, AppError> {
    match state.trips.update(id, &fields).await {
        Ok(_) => Ok(Redirect::to("/?notice=updated").into_response()),
        Err(TripError::Invalid(err)) => {
            Ok(render_rejected(&state, FormView::edit(id, fields), err.to_string()).await)
        }
        Err(err) => Err(err.into()),
    }
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    state.trips.remove(id).await?;
    Ok(Redirect::to("/?notice=deleted"))
}

async fn render_rejected(state: &AppState, form: FormView, message: String) -> Response {
    let messages = PageMessages {
        error: Some(message),
        notice: None,
    };
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        render_page(state, &DateQuery::default(), form, messages).await,
    )
        .into_response()
}

async fn render_page(
    state: &AppState,
    dates: &DateQuery,
    form: FormView,
    messages: PageMessages,
) -> Response {
    let TripView { trips, summary } = state.trips.view(&dates.range()).await;
    let rows = trips.iter().map(TripRow::from).collect();
    let (has_average, average_text) = match summary.average_distance {
        Some(average) => (true, format_number(average)),
        None => (false, String::new()),
    };

    AskamaTemplateResponse::into_response(TripsPageTemplate {
        form,
        show_error: messages.error.is_some(),
        error_message: messages.error.unwrap_or_default(),
        show_notice: messages.notice.is_some(),
        notice_message: messages
            .notice
            .map(|notice| notice.message().to_string())
            .unwrap_or_default(),
        filter_start: format_date(dates.start_date),
        filter_end: format_date(dates.end_date),
        filter_active: dates.start_date.is_some() || dates.end_date.is_some(),
        rows,
        count: summary.count,
        total_text: format_number(summary.total_distance),
        has_average,
        average_text,
        unit: state.config.distance_unit.clone(),
    })
}

fn format_number(value: f64) -> String {
    format!("{value:.1}")
}

fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%d.%m.%Y %H:%M").to_string()
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
