use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Upstream error ({status}): {detail}")]
    UpstreamError { status: u16, detail: String },
    #[error("Empty response: {0}")]
    EmptyResponse(String),
    #[error("Upload rejected by hosting provider")]
    UploadRejected { details: serde_json::Value },
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl GridError {
    /// HTTP status the server surfaces for this error. The download route
    /// overrides this for `UpstreamError` and forwards the carried status.
    pub fn status_code(&self) -> u16 {
        match self {
            GridError::InvalidInput(_) => 400,
            GridError::ConfigError(_)
            | GridError::RequestError(_)
            | GridError::UpstreamError { .. }
            | GridError::EmptyResponse(_)
            | GridError::UploadRejected { .. }
            | GridError::SerializationError(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_maps_to_bad_request() {
        assert_eq!(GridError::InvalidInput("Image required".into()).status_code(), 400);
    }

    #[test]
    fn everything_else_maps_to_server_error() {
        assert_eq!(GridError::ConfigError("FAL_KEY not set".into()).status_code(), 500);
        assert_eq!(
            GridError::UpstreamError { status: 404, detail: "not found".into() }.status_code(),
            500
        );
        assert_eq!(GridError::EmptyResponse("no images".into()).status_code(), 500);
    }

    #[test]
    fn upstream_error_display_names_the_status() {
        let err = GridError::UpstreamError { status: 422, detail: "bad prompt".into() };
        assert_eq!(err.to_string(), "Upstream error (422): bad prompt");
    }
}
