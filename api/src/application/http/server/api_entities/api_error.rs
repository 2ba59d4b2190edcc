use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ecoscan_core::domain::common::entities::app_errors::CoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        (status, Json(ApiErrorResponse {
            error: self.to_string(),
        }))
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::ExtractionFailed { .. }
            | CoreError::MissingFields(_)
            | CoreError::ProviderCallFailed(_) => ApiError::BadGateway(err.to_string()),
            CoreError::ProviderUnavailable(_) | CoreError::ProviderAuthMissing => {
                ApiError::ServiceUnavailable(err.to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_onto_the_expected_statuses() {
        let cases = [
            (
                CoreError::Invalid("bad image".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::ExtractionFailed {
                    raw: "garbage".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::MissingFields(vec!["score".to_string()]),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::ProviderCallFailed("denied".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::ProviderUnavailable("down".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (CoreError::ProviderAuthMissing, StatusCode::SERVICE_UNAVAILABLE),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn missing_fields_message_names_the_keys() {
        let err = ApiError::from(CoreError::MissingFields(vec![
            "score".to_string(),
            "dominant_category".to_string(),
        ]));
        assert_eq!(
            err.to_string(),
            "analysis response is missing required fields: score, dominant_category"
        );
    }
}
