use axum::Router;
use axum::http::StatusCode;
use crate::state::AppState;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Dropping a timed-out request also drops its in-flight provider call.
pub fn create_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    crate::routes::configure_routes()
        .layer(TimeoutLayer::with_status_code(StatusCode::GATEWAY_TIMEOUT, timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
