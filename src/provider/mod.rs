use async_trait::async_trait;

pub mod elastictranscoder;
pub mod registry;
pub mod status;

pub use registry::{FactoryError, ProviderFactory, ProviderRegistry};
pub use status::{JobState, JobStatus};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a provider call, classified at the backend call site.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The backend has no job with the given identifier.
    #[error("job not found")]
    JobNotFound { id: String },

    /// Any other transport or backend failure, passed through untouched.
    #[error(transparent)]
    Backend(BoxError),
}

/// Capabilities every transcoding backend adapter provides.
#[async_trait]
pub trait TranscodingProvider: Send + Sync {
    /// Submits `source` for transcoding into each of `profiles`, in order.
    ///
    /// Returns the backend-assigned job id along with its initial status.
    async fn transcode(&self, source: &str, profiles: &[String]) -> Result<JobStatus, ProviderError>;

    /// Fetches the live status of a job previously returned by `transcode`.
    async fn job_status(&self, provider_job_id: &str) -> Result<JobStatus, ProviderError>;
}
