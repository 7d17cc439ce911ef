use utoipa::OpenApi;
use crate::common::response::ResponseStatus;
use crate::modules::jobs::dto::{CreateJobRequest, CreateJobResponse};
use crate::provider::{JobState, JobStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::jobs::handler::create_job,
        crate::modules::jobs::handler::get_job,
        crate::modules::jobs::handler::list_providers,
    ),
    components(
        schemas(
            CreateJobRequest, CreateJobResponse, JobStatus, JobState, ResponseStatus,
        )
    ),
    tags(
        (name = "Jobs", description = "Transcoding job dispatch and status")
    )
)]
pub struct ApiDoc;
