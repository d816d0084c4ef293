//! Operational HTTP endpoints.
//!
//! - `/`        : liveness, always 200 with an empty body
//! - `/metrics` : exporter self-metrics, Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::obs::metrics::TEXT_CONTENT_TYPE;

pub async fn root() -> StatusCode {
    StatusCode::OK
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics().render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
            body,
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
