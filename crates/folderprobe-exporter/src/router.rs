//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, probe};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::root))
        .route("/metrics", get(ops::metrics))
        .route("/probe", get(probe::probe))
        .with_state(state)
}
