use super::dto::{CreateJobRequest, CreateJobResponse};
use super::error::ServiceError;
use super::model::JobRecord;
use crate::provider::{FactoryError, JobStatus, ProviderError, TranscodingProvider};
use crate::state::AppState;
use tracing::info;
use uuid::Uuid;

pub struct JobService;

impl JobService {
    /// Builds the named provider from the current configuration.
    ///
    /// Returns `None` when nothing is registered under `name`. Factory errors
    /// are left unclassified since create and query map them differently.
    fn build_provider(
        state: &AppState,
        name: &str,
    ) -> Option<Result<Box<dyn TranscodingProvider>, FactoryError>> {
        let factory = state.providers.get(name)?;
        Some(factory(&state.config))
    }

    pub async fn create_job(state: AppState, req: CreateJobRequest) -> Result<CreateJobResponse, ServiceError> {
        req.check()?;

        let provider = Self::build_provider(&state, &req.provider)
            .ok_or_else(|| ServiceError::UnknownProvider(req.provider.clone()))?
            .map_err(|source| {
                if matches!(source, FactoryError::InvalidConfig(_)) {
                    ServiceError::InvalidProviderConfig {
                        provider: req.provider.clone(),
                        source,
                    }
                } else {
                    ServiceError::ProviderInit {
                        provider: req.provider.clone(),
                        source,
                    }
                }
            })?;

        let status = provider
            .transcode(&req.source, &req.profiles)
            .await
            .map_err(|source| ServiceError::Provider {
                provider: req.provider.clone(),
                source,
            })?;

        let job = JobRecord {
            id: Uuid::new_v4().to_string(),
            provider_name: req.provider,
            provider_job_id: status.provider_job_id,
        };
        state.jobs.save(&job).await.map_err(ServiceError::Persistence)?;

        info!(
            "Created job {} on {} (provider job {}, {})",
            job.id, job.provider_name, job.provider_job_id, status.status
        );

        Ok(CreateJobResponse { job_id: job.id })
    }

    /// Looks up a job and asks its provider for the current status.
    ///
    /// Nothing is cached; every call goes to the backend.
    pub async fn get_job(state: AppState, job_id: String) -> Result<JobStatus, ServiceError> {
        let job = state
            .jobs
            .find_by_id(&job_id)
            .await
            .map_err(ServiceError::Persistence)?
            .ok_or_else(|| ServiceError::JobNotFound(job_id.clone()))?;

        let provider = Self::build_provider(&state, &job.provider_name).ok_or_else(|| {
            ServiceError::ProviderUnavailable {
                provider: job.provider_name.clone(),
                job_id: job_id.clone(),
            }
        })?
        // Any factory error on the query path is a server error.
        .map_err(|source| ServiceError::ProviderInit {
            provider: job.provider_name.clone(),
            source,
        })?;

        let status = provider
            .job_status(&job.provider_job_id)
            .await
            .map_err(|source| match source {
                ProviderError::JobNotFound { .. } => ServiceError::ProviderJobNotFound {
                    provider: job.provider_name.clone(),
                    job_id: job_id.clone(),
                    source,
                },
                ProviderError::Backend(_) => ServiceError::Provider {
                    provider: job.provider_name.clone(),
                    source,
                },
            })?;

        Ok(status.with_provider(&job.provider_name))
    }

    pub fn list_providers(state: &AppState) -> Vec<String> {
        state.providers.names()
    }
}
