#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use tower::ServiceExt;

use transcoding_api::app::create_app;
use transcoding_api::config::settings::{AppConfig, ElasticTranscoderConfig};
use transcoding_api::modules::jobs::repository::MemoryJobRepository;
use transcoding_api::provider::elastictranscoder::{
    self, CreateJobInput, ElasticTranscoderProvider, TranscoderClient, TranscoderJob,
};
use transcoding_api::provider::{BoxError, ProviderRegistry, TranscodingProvider};
use transcoding_api::state::AppState;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct PreparedError(pub &'static str);

/// In-process Elastic Transcoder: jobs are accepted as `Submitted` and read
/// back as `Complete`. Failures can be queued per operation.
#[derive(Default)]
pub struct FakeTranscoder {
    pub jobs: Mutex<HashMap<String, CreateJobInput>>,
    failures: Mutex<HashMap<&'static str, &'static str>>,
}

impl FakeTranscoder {
    pub fn prepare_failure(&self, op: &'static str, message: &'static str) {
        self.failures.lock().unwrap().insert(op, message);
    }

    /// Drops every job, as if the backend expired them.
    pub fn forget_jobs(&self) {
        self.jobs.lock().unwrap().clear();
    }

    fn take_failure(&self, op: &str) -> Option<BoxError> {
        self.failures
            .lock()
            .unwrap()
            .remove(op)
            .map(|msg| Box::new(PreparedError(msg)) as BoxError)
    }
}

#[async_trait]
impl TranscoderClient for FakeTranscoder {
    async fn create_job(&self, input: CreateJobInput) -> Result<TranscoderJob, BoxError> {
        if let Some(err) = self.take_failure("CreateJob") {
            return Err(err);
        }
        let id = format!("job-{}", &uuid::Uuid::new_v4().simple().to_string()[..8]);
        self.jobs.lock().unwrap().insert(id.clone(), input);
        Ok(TranscoderJob {
            id,
            status: "Submitted".to_string(),
        })
    }

    async fn read_job(&self, id: &str) -> Result<Option<TranscoderJob>, BoxError> {
        if let Some(err) = self.take_failure("ReadJob") {
            return Err(err);
        }
        Ok(self.jobs.lock().unwrap().get(id).map(|_| TranscoderJob {
            id: id.to_string(),
            status: "Complete".to_string(),
        }))
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        redis_url: None,
        request_timeout_secs: 30,
        elastic_transcoder: ElasticTranscoderConfig {
            access_key_id: "AKIA".to_string(),
            secret_access_key: "secret".to_string(),
            pipeline_id: "mypipeline".to_string(),
            region: "sa-east-1".to_string(),
        },
    }
}

pub struct TestApp {
    pub router: Router,
    pub transcoder: Arc<FakeTranscoder>,
    pub jobs: Arc<MemoryJobRepository>,
}

/// Registers the Elastic Transcoder factory against a fake client, keeping
/// the real configuration validation in the path.
pub fn registry_with(transcoder: Arc<FakeTranscoder>) -> ProviderRegistry {
    ProviderRegistry::new().register(elastictranscoder::NAME, move |config: &AppConfig| {
        let provider = ElasticTranscoderProvider::with_client(&config.elastic_transcoder, transcoder.clone())?;
        Ok(Box::new(provider) as Box<dyn TranscodingProvider>)
    })
}

pub fn build_test_app_with(config: AppConfig) -> TestApp {
    let transcoder = Arc::new(FakeTranscoder::default());
    let jobs = Arc::new(MemoryJobRepository::new());
    let state = AppState::new(config, registry_with(transcoder.clone()), jobs.clone());

    TestApp {
        router: create_app(state),
        transcoder,
        jobs,
    }
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
