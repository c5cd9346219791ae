use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::lookup_error::LookupError;

/// Shown for every failed lookup; callers are not told which stage failed.
pub const LOCATION_NOT_FOUND_MESSAGE: &str = "Could not find location. Please try again.";

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        warn!("Lookup failed: {}", e);
        AppError::new(StatusCode::NOT_FOUND, LOCATION_NOT_FOUND_MESSAGE)
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponseJson {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ErrorResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
