use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Normalized job state, identical for every backend.
///
/// Purely descriptive of what the backend reported at query time; no
/// transition rules are enforced on this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Queued,
    Started,
    Finished,
    Failed,
    Canceled,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobState::Queued => "queued",
            JobState::Started => "started",
            JobState::Finished => "finished",
            JobState::Failed => "failed",
            JobState::Canceled => "canceled",
        };
        write!(f, "{}", s)
    }
}

/// Live status of a backend job.
///
/// `provider_name` is left empty by providers and filled in by the job
/// service once it knows which registry entry produced the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub provider_job_id: String,
    pub status: JobState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider_name: String,
}

impl JobStatus {
    pub fn new(provider_job_id: impl Into<String>, status: JobState) -> Self {
        Self {
            provider_job_id: provider_job_id.into(),
            status,
            provider_name: String::new(),
        }
    }

    pub fn with_provider(mut self, provider_name: &str) -> Self {
        self.provider_name = provider_name.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_state_lowercase() {
        let status = JobStatus::new("job-1234abcd", JobState::Finished).with_provider("elastictranscoder");
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["providerJobId"], "job-1234abcd");
        assert_eq!(json["status"], "finished");
        assert_eq!(json["providerName"], "elastictranscoder");
    }

    #[test]
    fn omits_unset_provider_name() {
        let json = serde_json::to_value(JobStatus::new("x", JobState::Queued)).unwrap();
        assert!(json.get("providerName").is_none());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(JobState::Canceled.to_string(), "canceled");
        assert_eq!(JobState::Started.to_string(), "started");
    }
}
