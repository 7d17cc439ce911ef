use crate::common::response::ApiError;
use crate::provider::{FactoryError, ProviderError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// Failure of a job operation, tagged with the HTTP class it maps to.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Missing or malformed request field.
    #[error("{0}")]
    Validation(String),

    #[error("Unknown provider found in request: {0}")]
    UnknownProvider(String),

    #[error("Error initializing provider {provider}: {source}")]
    InvalidProviderConfig {
        provider: String,
        #[source]
        source: FactoryError,
    },

    #[error("Error initializing provider {provider}: {source}")]
    ProviderInit {
        provider: String,
        #[source]
        source: FactoryError,
    },

    /// A stored job names a provider that is no longer registered.
    #[error("Unknown provider '{provider}' for job id '{job_id}'")]
    ProviderUnavailable { provider: String, job_id: String },

    #[error("Error retrieving job with id '{0}': job not found")]
    JobNotFound(String),

    /// The backend no longer knows (or never knew) the job.
    #[error("Error with provider '{provider}' when trying to retrieve job id '{job_id}': {source}")]
    ProviderJobNotFound {
        provider: String,
        job_id: String,
        #[source]
        source: ProviderError,
    },

    #[error("Error with provider '{provider}': {source}")]
    Provider {
        provider: String,
        #[source]
        source: ProviderError,
    },

    #[error("Job store error: {0}")]
    Persistence(#[source] anyhow::Error),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_)
            | ServiceError::UnknownProvider(_)
            | ServiceError::InvalidProviderConfig { .. } => StatusCode::BAD_REQUEST,
            ServiceError::JobNotFound(_) | ServiceError::ProviderJobNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            ServiceError::ProviderInit { .. }
            | ServiceError::ProviderUnavailable { .. }
            | ServiceError::Provider { .. }
            | ServiceError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self, "{}", self);
        } else {
            warn!("{}", self);
        }
        ApiError(self.to_string(), status).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(ServiceError::Validation("Missing source from request".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::UnknownProvider("nope".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServiceError::InvalidProviderConfig {
                provider: "elastictranscoder".into(),
                source: FactoryError::InvalidConfig("missing pipeline".into()),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ServiceError::JobNotFound("abc".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServiceError::ProviderJobNotFound {
                provider: "elastictranscoder".into(),
                job_id: "abc".into(),
                source: ProviderError::JobNotFound { id: "job-1".into() },
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn server_errors_map_to_500() {
        let provider = ServiceError::Provider {
            provider: "elastictranscoder".into(),
            source: ProviderError::Backend("connection reset".into()),
        };
        assert_eq!(provider.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(provider.to_string(), "Error with provider 'elastictranscoder': connection reset");

        let store = ServiceError::Persistence(anyhow::anyhow!("redis down"));
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.to_string(), "Job store error: redis down");

        let init = ServiceError::ProviderInit {
            provider: "x".into(),
            source: FactoryError::Other("no tls roots".into()),
        };
        assert_eq!(init.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
