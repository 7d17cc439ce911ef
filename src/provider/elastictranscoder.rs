use super::{BoxError, FactoryError, JobState, JobStatus, ProviderError, TranscodingProvider};
use crate::config::settings::{AppConfig, ElasticTranscoderConfig};
use async_trait::async_trait;
use aws_sdk_elastictranscoder::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_elastictranscoder::types::{CreateJobOutput as SdkJobOutput, Job, JobInput};
use aws_sdk_elastictranscoder::{Client, Error as SdkError};
use std::sync::Arc;
use tracing::debug;

pub const NAME: &str = "elastictranscoder";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Body of a CreateJob call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJobInput {
    pub pipeline_id: String,
    pub input_key: String,
    pub outputs: Vec<JobOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutput {
    pub preset_id: String,
    pub key: String,
}

/// The parts of a backend job this adapter cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscoderJob {
    pub id: String,
    pub status: String,
}

/// Narrow view of the Elastic Transcoder API used by the provider.
#[async_trait]
pub trait TranscoderClient: Send + Sync {
    async fn create_job(&self, input: CreateJobInput) -> Result<TranscoderJob, BoxError>;

    /// Returns `Ok(None)` when the service answers with ResourceNotFound.
    async fn read_job(&self, id: &str) -> Result<Option<TranscoderJob>, BoxError>;
}

/// `TranscoderClient` backed by the AWS SDK.
#[derive(Clone)]
pub struct SdkTranscoderClient {
    client: Client,
}

impl SdkTranscoderClient {
    pub fn new(access_key: &str, secret_key: &str, region: &str) -> Self {
        let credentials = Credentials::new(access_key, secret_key, None, None, "static");

        let config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials)
            .build();

        Self {
            client: Client::from_conf(config),
        }
    }

    /// Region the SDK client is bound to.
    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(|region| region.as_ref())
    }
}

fn to_transcoder_job(job: &Job) -> Result<TranscoderJob, BoxError> {
    let id = job
        .id()
        .filter(|id| !id.is_empty())
        .ok_or("Elastic Transcoder returned a job without an id")?;

    Ok(TranscoderJob {
        id: id.to_string(),
        status: job.status().unwrap_or_default().to_string(),
    })
}

#[async_trait]
impl TranscoderClient for SdkTranscoderClient {
    async fn create_job(&self, input: CreateJobInput) -> Result<TranscoderJob, BoxError> {
        let outputs = input
            .outputs
            .into_iter()
            .map(|output| {
                SdkJobOutput::builder()
                    .preset_id(output.preset_id)
                    .key(output.key)
                    .build()
            })
            .collect();

        let result = self
            .client
            .create_job()
            .pipeline_id(input.pipeline_id)
            .input(JobInput::builder().key(input.input_key).build())
            .set_outputs(Some(outputs))
            .send()
            .await
            .map_err(SdkError::from)?;

        let job = result.job().ok_or("CreateJob response did not include a job")?;
        to_transcoder_job(job)
    }

    async fn read_job(&self, id: &str) -> Result<Option<TranscoderJob>, BoxError> {
        match self.client.read_job().id(id).send().await {
            Ok(result) => result.job().map(to_transcoder_job).transpose(),
            Err(err) => match SdkError::from(err) {
                SdkError::ResourceNotFoundException(_) => Ok(None),
                other => Err(other.into()),
            },
        }
    }
}

/// Provider submitting jobs to an AWS Elastic Transcoder pipeline.
pub struct ElasticTranscoderProvider {
    client: Arc<dyn TranscoderClient>,
    config: ElasticTranscoderConfig,
    region: String,
}

impl ElasticTranscoderProvider {
    /// Validates `config` and builds an SDK client bound to it.
    pub fn new(config: &ElasticTranscoderConfig) -> Result<Self, FactoryError> {
        let region = Self::validate(config)?;
        let client = SdkTranscoderClient::new(&config.access_key_id, &config.secret_access_key, &region);
        let region = client.region().unwrap_or(region.as_str()).to_string();
        Ok(Self {
            client: Arc::new(client),
            config: config.clone(),
            region,
        })
    }

    /// Same validation as `new`, talking to the given client instead of AWS.
    pub fn with_client(
        config: &ElasticTranscoderConfig,
        client: Arc<dyn TranscoderClient>,
    ) -> Result<Self, FactoryError> {
        let region = Self::validate(config)?;
        Ok(Self {
            client,
            config: config.clone(),
            region,
        })
    }

    fn validate(config: &ElasticTranscoderConfig) -> Result<String, FactoryError> {
        if config.access_key_id.is_empty()
            || config.secret_access_key.is_empty()
            || config.pipeline_id.is_empty()
        {
            return Err(FactoryError::InvalidConfig(
                "missing Elastic Transcoder access key id, secret access key or pipeline id".to_string(),
            ));
        }

        if config.region.is_empty() {
            Ok(DEFAULT_REGION.to_string())
        } else {
            Ok(config.region.clone())
        }
    }

    pub fn config(&self) -> &ElasticTranscoderConfig {
        &self.config
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn status_map(status: &str) -> JobState {
        match status {
            "Submitted" => JobState::Queued,
            "Progressing" => JobState::Started,
            "Canceled" => JobState::Canceled,
            "Error" => JobState::Failed,
            "Complete" => JobState::Finished,
            _ => JobState::Failed,
        }
    }
}

/// `dir/file.mp4` with preset `P` becomes `dir/P/file.mp4`.
fn output_key(source: &str, preset_id: &str) -> String {
    match source.rsplit_once('/') {
        Some((dir, file)) => format!("{}/{}/{}", dir, preset_id, file),
        None => format!("{}/{}", preset_id, source),
    }
}

#[async_trait]
impl TranscodingProvider for ElasticTranscoderProvider {
    async fn transcode(&self, source: &str, profiles: &[String]) -> Result<JobStatus, ProviderError> {
        let input = CreateJobInput {
            pipeline_id: self.config.pipeline_id.clone(),
            input_key: source.to_string(),
            outputs: profiles
                .iter()
                .map(|preset_id| JobOutput {
                    preset_id: preset_id.clone(),
                    key: output_key(source, preset_id),
                })
                .collect(),
        };

        debug!("Creating Elastic Transcoder job for {} ({} outputs)", source, input.outputs.len());

        let job = self
            .client
            .create_job(input)
            .await
            .map_err(ProviderError::Backend)?;

        Ok(JobStatus::new(job.id, Self::status_map(&job.status)))
    }

    async fn job_status(&self, provider_job_id: &str) -> Result<JobStatus, ProviderError> {
        let job = self
            .client
            .read_job(provider_job_id)
            .await
            .map_err(ProviderError::Backend)?
            .ok_or_else(|| ProviderError::JobNotFound {
                id: provider_job_id.to_string(),
            })?;

        Ok(JobStatus::new(job.id, Self::status_map(&job.status)))
    }
}

pub fn factory(config: &AppConfig) -> Result<Box<dyn TranscodingProvider>, FactoryError> {
    let provider = ElasticTranscoderProvider::new(&config.elastic_transcoder)?;
    Ok(Box::new(provider))
}
