use super::{BoxError, TranscodingProvider};
use crate::config::settings::AppConfig;
use std::collections::HashMap;
use std::sync::Arc;

/// Builds a provider from the process configuration.
pub type ProviderFactory =
    Arc<dyn Fn(&AppConfig) -> Result<Box<dyn TranscodingProvider>, FactoryError> + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// A mandatory configuration field is missing or empty.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Other(BoxError),
}

/// Provider name to factory lookup.
///
/// Populated once at startup through the by-value `register` builder and
/// shared read-only afterwards.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: HashMap<String, ProviderFactory>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every backend shipped with the service.
    pub fn with_builtin() -> Self {
        Self::new().register(
            super::elastictranscoder::NAME,
            super::elastictranscoder::factory,
        )
    }

    pub fn register<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn(&AppConfig) -> Result<Box<dyn TranscodingProvider>, FactoryError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(name.to_string(), Arc::new(factory));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ProviderFactory> {
        self.factories.get(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }
}
