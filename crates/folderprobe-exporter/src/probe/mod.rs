//! `/probe` handler.
//!
//! One request is validate -> scan -> compute -> render. Each call builds its
//! own `prometheus::Registry` holding a single gauge, so concurrent probes of
//! different targets never share label values. The scan runs on the blocking
//! pool and is not cancelled if the client goes away.

use std::path::PathBuf;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use prometheus::{GaugeVec, Opts, Registry};

use folderprobe_core::elapsed::elapsed_since;
use folderprobe_core::error::{ProbeError, Result};

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::obs::metrics::{render_registry, ProbeOutcome, TEXT_CONTENT_TYPE};

pub const METRIC_NAME: &str = "folder_last_update_seconds";
pub const METRIC_HELP: &str = "Time in seconds since the last update of the probed folder.";
pub const LABEL: &str = "folder";

pub const TARGET_PARAM: &str = "target";

/// First `target` value in query order. Repeated keys are not an error.
pub fn first_target(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(k, _)| k == TARGET_PARAM)
        .map(|(_, v)| v)
}

pub async fn probe(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let result = run_probe(&state, first_target(pairs)).await;

    let outcome = match &result {
        Ok(_) => ProbeOutcome::Success,
        Err(e) => ProbeOutcome::from_error(e),
    };
    state.metrics().record_probe(outcome);

    match result {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
            body,
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

async fn run_probe(state: &AppState, target: Option<String>) -> Result<String> {
    let target = target
        .filter(|t| !t.is_empty())
        .ok_or(ProbeError::MissingTarget)?;

    let policy = state.scan_policy();
    let path = PathBuf::from(&target);
    let started = Instant::now();
    let scanned = tokio::task::spawn_blocking(move || policy.scan(&path))
        .await
        .map_err(|e| ProbeError::Internal(format!("scan task failed: {e}")))?;
    state.metrics().observe_scan(started.elapsed());

    let last_update = scanned.inspect_err(|e| {
        tracing::warn!(
            folder = %target,
            %policy,
            code = e.client_code().as_str(),
            error = %e,
            "scan failed"
        );
    })?;

    let seconds = elapsed_since(last_update);
    tracing::debug!(folder = %target, %policy, seconds, "probe complete");

    render_probe(&target, seconds)
}

/// Render a single-gauge registry for `target`.
pub fn render_probe(target: &str, seconds: f64) -> Result<String> {
    let registry = Registry::new();
    let gauge = GaugeVec::new(Opts::new(METRIC_NAME, METRIC_HELP), &[LABEL])
        .map_err(|e| ProbeError::Internal(format!("gauge: {e}")))?;
    registry
        .register(Box::new(gauge.clone()))
        .map_err(|e| ProbeError::Internal(format!("register gauge: {e}")))?;

    gauge.with_label_values(&[target]).set(seconds);
    render_registry(&registry)
}
