use super::dto::{CreateJobRequest, CreateJobResponse};
use super::service::JobService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::provider::JobStatus;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Dispatch a new transcoding job
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 200, description = "Job dispatched", body = ApiResponse<CreateJobResponse>),
        (status = 400, description = "Invalid request, unknown provider or provider misconfigured"),
        (status = 500, description = "Provider or job store failure")
    ),
    tag = "Jobs"
)]
pub async fn create_job(
    State(state): State<AppState>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(e) => {
            return ApiError(
                format!("Error while parsing request: {}", e.body_text()),
                StatusCode::BAD_REQUEST,
            )
            .into_response();
        }
    };

    match JobService::create_job(state, req).await {
        Ok(job) => ApiSuccess::ok(job, "Job created successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get the live status of a job
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{jobId}",
    params(
        ("jobId" = String, Path, description = "Internal job ID")
    ),
    responses(
        (status = 200, description = "Current job status", body = ApiResponse<JobStatus>),
        (status = 404, description = "Unknown job, locally or at the provider"),
        (status = 500, description = "Provider or job store failure")
    ),
    tag = "Jobs"
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    match JobService::get_job(state, job_id).await {
        Ok(status) => ApiSuccess::ok(status, "Job status retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// List registered providers
#[utoipa::path(
    get,
    path = "/api/v1/providers",
    responses(
        (status = 200, description = "Provider names", body = ApiResponse<Vec<String>>)
    ),
    tag = "Jobs"
)]
pub async fn list_providers(State(state): State<AppState>) -> impl IntoResponse {
    ApiSuccess::ok(JobService::list_providers(&state), "Providers retrieved successfully")
}
