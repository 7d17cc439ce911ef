use super::error::ServiceError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateJobRequest {
    /// Location of the input media, as understood by the provider.
    #[validate(length(min = 1, message = "Missing source from request"))]
    pub source: String,
    /// Provider preset ids, one output per entry.
    #[validate(length(min = 1, message = "Missing profiles from request"))]
    pub profiles: Vec<String>,
    #[validate(length(min = 1, message = "Missing provider from request"))]
    pub provider: String,
}

impl CreateJobRequest {
    /// Reports the first invalid field, checking provider, source, then profiles.
    pub fn check(&self) -> Result<(), ServiceError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        for field in ["provider", "source", "profiles"] {
            if let Some(first) = field_errors.get(field).and_then(|errs| errs.first()) {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {} in request", field));
                return Err(ServiceError::Validation(message));
            }
        }

        Err(ServiceError::Validation(errors.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateJobResponse {
    #[serde(rename = "jobId")]
    pub job_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(provider: &str, source: &str, profiles: &[&str]) -> CreateJobRequest {
        CreateJobRequest {
            source: source.to_string(),
            profiles: profiles.iter().map(|p| p.to_string()).collect(),
            provider: provider.to_string(),
        }
    }

    fn message(req: CreateJobRequest) -> String {
        match req.check() {
            Err(ServiceError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_complete_request() {
        assert!(request("elastictranscoder", "dir/file.mp4", &["P1"]).check().is_ok());
    }

    #[test]
    fn names_the_missing_field() {
        assert_eq!(message(request("", "dir/file.mp4", &["P1"])), "Missing provider from request");
        assert_eq!(message(request("elastictranscoder", "", &["P1"])), "Missing source from request");
        assert_eq!(message(request("elastictranscoder", "dir/file.mp4", &[])), "Missing profiles from request");
    }

    #[test]
    fn provider_is_reported_before_other_fields() {
        assert_eq!(message(CreateJobRequest::default()), "Missing provider from request");
        assert_eq!(message(request("elastictranscoder", "", &[])), "Missing source from request");
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let req: CreateJobRequest = serde_json::from_str(r#"{"source": "dir/file.mp4"}"#).unwrap();
        assert_eq!(message(req), "Missing provider from request");
    }
}
