use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub const NOT_SUPPORTED_MESSAGE: &str = "CRUD operations not supported in static mode";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{}", NOT_SUPPORTED_MESSAGE)]
    NotSupported,
    #[error("Authorization token is incorrect.")]
    Unauthorized,
    #[error("invalid item: {0}")]
    InvalidItem(String),
    #[error("remote content service answered {status}: {message}")]
    Remote { status: u16, message: String },
    #[error("failed to reach remote content service: {0}")]
    Transport(String),
    #[error("content data structure is incorrect: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("content data could not be read: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for ContentError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContentError::NotSupported => StatusCode::NOT_IMPLEMENTED,
            ContentError::Unauthorized => StatusCode::UNAUTHORIZED,
            ContentError::InvalidItem(_) => StatusCode::BAD_REQUEST,
            ContentError::Remote { .. } | ContentError::Transport(_) => StatusCode::BAD_GATEWAY,
            ContentError::Decode(_) | ContentError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_supported_keeps_fixed_message() {
        let error = ContentError::NotSupported;
        assert_eq!(error.to_string(), NOT_SUPPORTED_MESSAGE);
        assert_eq!(error.status_code(), StatusCode::NOT_IMPLEMENTED);
    }

    #[test]
    fn remote_failures_map_to_bad_gateway() {
        let error = ContentError::Remote {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn invalid_items_are_the_caller_fault() {
        let error = ContentError::InvalidItem("missing _id".to_string());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "invalid item: missing _id");
    }
}
