//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use homeswitch_domain::error::HomeSwitchError;
use homeswitch_domain::payload::ErrorReply;

/// Maps [`HomeSwitchError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HomeSwitchError);

impl<E> From<E> for ApiError
where
    E: Into<HomeSwitchError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HomeSwitchError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HomeSwitchError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HomeSwitchError::Publish(err) => {
                tracing::error!(error = %err, "failed to publish command");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorReply::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeswitch_domain::error::{NetworkError, NotFoundError, ValidationError};

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let response = ApiError::from(ValidationError::MissingStatus).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_error_to_not_found() {
        let response = ApiError::from(NotFoundError {
            entity: "Device",
            id: "x".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_publish_failure_details() {
        let response =
            ApiError::from(HomeSwitchError::Publish("broker down".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_map_directory_failures_to_internal_server_error() {
        let response =
            ApiError::from(NetworkError::new("directory unavailable")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
