use crate::api::types::BridgeResponse;
use crate::relay::RelayError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// Body could not be decoded into a submission
    #[error("{0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Relay(RelayError::Validation(_)) | ApiError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Relay(RelayError::DeviceNotFound) => StatusCode::NOT_FOUND,
            ApiError::Relay(RelayError::Unauthorized) => StatusCode::UNAUTHORIZED,
            ApiError::Relay(RelayError::Remote(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(BridgeResponse::failure(self.to_string()));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
