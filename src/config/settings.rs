use serde::Deserialize;
use crate::config::env::{self, EnvKey};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    /// Job records go to Redis when set, otherwise they live in memory.
    pub redis_url: Option<String>,
    pub request_timeout_secs: u64,
    pub elastic_transcoder: ElasticTranscoderConfig,
}

/// Credentials and pipeline for the Elastic Transcoder provider.
///
/// Fields are not checked here; the provider factory rejects empty ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ElasticTranscoderConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub pipeline_id: String,
    pub region: String,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            redis_url: env::get(EnvKey::RedisUrl).ok().filter(|url| !url.is_empty()),
            request_timeout_secs: env::get_parsed(EnvKey::RequestTimeoutSecs, 30),
            elastic_transcoder: ElasticTranscoderConfig {
                access_key_id: env::get_or(EnvKey::ElasticTranscoderAccessKeyId, ""),
                secret_access_key: env::get_or(EnvKey::ElasticTranscoderSecretAccessKey, ""),
                pipeline_id: env::get_or(EnvKey::ElasticTranscoderPipelineId, ""),
                region: env::get_or(EnvKey::ElasticTranscoderRegion, ""),
            },
        }
    }
}
