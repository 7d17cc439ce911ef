use crate::config::settings::AppConfig;
use crate::modules::jobs::repository::JobRepository;
use crate::provider::ProviderRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub providers: Arc<ProviderRegistry>,
    pub jobs: Arc<dyn JobRepository>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        providers: ProviderRegistry,
        jobs: Arc<dyn JobRepository>,
    ) -> Self {
        Self {
            config,
            providers: Arc::new(providers),
            jobs,
        }
    }
}
