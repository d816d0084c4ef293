//! Shared application state for the folderprobe exporter.
//!
//! Built once at startup and handed to the router; handlers reach it through
//! axum `State`. Holds the config, the active scan policy, and the
//! process-wide metrics registry.

use std::sync::Arc;

use folderprobe_core::error::Result;
use folderprobe_core::ScanPolicy;

use crate::config::ExporterConfig;
use crate::obs::metrics::ExporterMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    metrics: ExporterMetrics,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let metrics = ExporterMetrics::new(cfg.exporter.scan_policy)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
        })
    }

    pub fn scan_policy(&self) -> ScanPolicy {
        self.inner.cfg.exporter.scan_policy
    }

    pub fn metrics(&self) -> &ExporterMetrics {
        &self.inner.metrics
    }
}
