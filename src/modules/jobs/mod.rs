use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> axum::Router<AppState> {
    Router::new()
        .route("/jobs", post(handler::create_job))
        .route("/jobs/{jobId}", get(handler::get_job))
        .route("/providers", get(handler::list_providers))
}
