use serde::{Deserialize, Serialize};

/// Link between an internal job id and the backend job it was dispatched to.
///
/// Written once when the job is created and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub provider_name: String,
    pub provider_job_id: String,
}
