//! HTTP mapping for `ProbeError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use folderprobe_core::error::ProbeError;

/// `ProbeError` rendered as a plain-text HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ProbeError);

impl From<ProbeError> for ApiError {
    fn from(e: ProbeError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ProbeError::MissingTarget => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self.0 {
            ProbeError::MissingTarget => self.0.to_string(),
            ProbeError::Scan { .. } => format!("Error reading target folder: {}", self.0),
            other => other.to_string(),
        };
        (status, body).into_response()
    }
}
