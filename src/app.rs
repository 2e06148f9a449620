use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/demographic-view", get(handlers::demographic_view))
        .route("/device-view", get(handlers::device_view))
        .route("/region-view", get(handlers::region_view))
        .route("/weekly-view", get(handlers::weekly_view))
        .route("/api/marketing-data", get(handlers::get_marketing_data))
        .route("/api/demographics", get(handlers::get_demographics))
        .route("/api/devices", get(handlers::get_devices))
        .route("/api/regions", get(handlers::get_regions))
        .route("/api/weekly", get(handlers::get_weekly))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
