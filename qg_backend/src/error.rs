use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use qg_core::error::ErrorCore;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

pub type ResultAPI = std::result::Result<Json<Value>, crate::error::ErrorBackend>;
pub type Result<T> = std::result::Result<T, crate::error::ErrorBackend>;

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Core(#[from] ErrorCore),

    #[error("Invalid request body: {0}")]
    Rejection(#[from] JsonRejection),

    #[error("Quiz provider is unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Missing required environment variable: {0}")]
    MissingApiKey(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> Response {
        let status = match &self {
            ErrorBackend::Core(ErrorCore::InvalidInput(_)) => axum::http::StatusCode::BAD_REQUEST,
            ErrorBackend::Rejection(_) => axum::http::StatusCode::BAD_REQUEST,
            ErrorBackend::Core(ErrorCore::MalformedResponse(_)) => {
                axum::http::StatusCode::BAD_GATEWAY
            }
            ErrorBackend::UpstreamUnavailable(_) => axum::http::StatusCode::BAD_GATEWAY,
            ErrorBackend::Http(_) => axum::http::StatusCode::BAD_GATEWAY,
            ErrorBackend::Core(_) | ErrorBackend::MissingApiKey(_) | ErrorBackend::Io(_) => {
                axum::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error!("Request failed: {self}");
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let response =
            ErrorBackend::Core(ErrorCore::InvalidInput("no topics".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_response_maps_to_bad_gateway() {
        let response =
            ErrorBackend::Core(ErrorCore::MalformedResponse("bad block".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_upstream_unavailable_maps_to_bad_gateway() {
        let response =
            ErrorBackend::UpstreamUnavailable("http://localhost:1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
