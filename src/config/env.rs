use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    RedisUrl,
    RequestTimeoutSecs,
    ElasticTranscoderAccessKeyId,
    ElasticTranscoderSecretAccessKey,
    ElasticTranscoderPipelineId,
    ElasticTranscoderRegion,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::RedisUrl => "REDIS_URL",
            EnvKey::RequestTimeoutSecs => "REQUEST_TIMEOUT_SECS",
            EnvKey::ElasticTranscoderAccessKeyId => "ELASTICTRANSCODER_ACCESS_KEY_ID",
            EnvKey::ElasticTranscoderSecretAccessKey => "ELASTICTRANSCODER_SECRET_ACCESS_KEY",
            EnvKey::ElasticTranscoderPipelineId => "ELASTICTRANSCODER_PIPELINE_ID",
            EnvKey::ElasticTranscoderRegion => "ELASTICTRANSCODER_REGION",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
