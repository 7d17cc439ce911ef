use super::model::JobRecord;
use crate::infrastructure::redis::client::RedisService;
use anyhow::{Result, bail};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

/// Key-value store for job records, keyed by internal job id.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Persists a new record. Fails if a record with the same id exists.
    async fn save(&self, job: &JobRecord) -> Result<()>;

    async fn find_by_id(&self, id: &str) -> Result<Option<JobRecord>>;
}

pub struct RedisJobRepository {
    redis: RedisService,
}

impl RedisJobRepository {
    pub fn new(redis: RedisService) -> Self {
        Self { redis }
    }

    fn key(id: &str) -> String {
        format!("job:{}", id)
    }
}

#[async_trait]
impl JobRepository for RedisJobRepository {
    async fn save(&self, job: &JobRecord) -> Result<()> {
        if !self.redis.set_json_nx(&Self::key(&job.id), job).await? {
            bail!("job record {} already exists", job.id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<JobRecord>> {
        self.redis.get_json(&Self::key(id)).await
    }
}

/// Process-local store, used when no Redis URL is configured.
#[derive(Default)]
pub struct MemoryJobRepository {
    jobs: RwLock<HashMap<String, JobRecord>>,
}

impl MemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

#[async_trait]
impl JobRepository for MemoryJobRepository {
    async fn save(&self, job: &JobRecord) -> Result<()> {
        match self.jobs.write().await.entry(job.id.clone()) {
            Entry::Occupied(_) => bail!("job record {} already exists", job.id),
            Entry::Vacant(slot) => {
                slot.insert(job.clone());
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<JobRecord>> {
        Ok(self.jobs.read().await.get(id).cloned())
    }
}
