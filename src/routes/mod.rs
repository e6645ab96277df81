pub mod api;
pub mod trips;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let static_root = state.config.static_root.clone();
    Router::new()
        .merge(trips::router())
        .nest("/api", api::router())
        .nest_service("/static", ServeDir::new(static_root))
        .with_state(state)
}
