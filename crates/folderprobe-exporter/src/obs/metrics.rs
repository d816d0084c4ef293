//! Exporter self-metrics served on `/metrics`.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

use folderprobe_core::error::{ClientCode, ProbeError, Result};
use folderprobe_core::ScanPolicy;

/// Content type of the text exposition format.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Outcome label values for `folderprobe_probes_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success,
    BadRequest,
    ScanError,
    Internal,
}

impl ProbeOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            ProbeOutcome::Success => "success",
            ProbeOutcome::BadRequest => "bad_request",
            ProbeOutcome::ScanError => "scan_error",
            ProbeOutcome::Internal => "internal",
        }
    }

    pub fn from_error(err: &ProbeError) -> Self {
        match err.client_code() {
            ClientCode::BadRequest => ProbeOutcome::BadRequest,
            ClientCode::ScanFailed => ProbeOutcome::ScanError,
            ClientCode::InvalidConfig | ClientCode::UnsupportedVersion | ClientCode::Internal => {
                ProbeOutcome::Internal
            }
        }
    }
}

pub struct ExporterMetrics {
    registry: Registry,
    pub probes_total: IntCounterVec,
    pub scan_duration: Histogram,
    pub build_info: IntGaugeVec,
}

impl ExporterMetrics {
    pub fn new(policy: ScanPolicy) -> Result<Self> {
        let registry = Registry::new();

        let probes_total = IntCounterVec::new(
            Opts::new("folderprobe_probes_total", "Probe requests handled, by outcome."),
            &["outcome"],
        )
        .map_err(internal)?;

        let scan_duration = Histogram::with_opts(
            HistogramOpts::new(
                "folderprobe_scan_duration_seconds",
                "Wall time spent scanning probe targets.",
            )
            .buckets(vec![
                0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0, 30.0, 60.0,
            ]),
        )
        .map_err(internal)?;

        let build_info = IntGaugeVec::new(
            Opts::new("folderprobe_build_info", "Exporter version and active scan policy."),
            &["version", "scan_policy"],
        )
        .map_err(internal)?;

        registry.register(Box::new(probes_total.clone())).map_err(internal)?;
        registry.register(Box::new(scan_duration.clone())).map_err(internal)?;
        registry.register(Box::new(build_info.clone())).map_err(internal)?;

        // process_cpu_seconds_total, process_resident_memory_bytes, process_open_fds, ...
        #[cfg(target_os = "linux")]
        registry
            .register(Box::new(
                prometheus::process_collector::ProcessCollector::for_self(),
            ))
            .map_err(internal)?;

        build_info
            .with_label_values(&[env!("CARGO_PKG_VERSION"), policy.as_str()])
            .set(1);

        // Pre-create outcome series so they render as 0 before the first probe.
        for outcome in [
            ProbeOutcome::Success,
            ProbeOutcome::BadRequest,
            ProbeOutcome::ScanError,
            ProbeOutcome::Internal,
        ] {
            probes_total.with_label_values(&[outcome.as_str()]);
        }

        Ok(Self {
            registry,
            probes_total,
            scan_duration,
            build_info,
        })
    }

    pub fn record_probe(&self, outcome: ProbeOutcome) {
        self.probes_total.with_label_values(&[outcome.as_str()]).inc();
    }

    pub fn observe_scan(&self, took: Duration) {
        self.scan_duration.observe(took.as_secs_f64());
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        render_registry(&self.registry)
    }
}

/// Render any registry in Prometheus text exposition format.
pub fn render_registry(registry: &Registry) -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).map_err(internal)?;
    String::from_utf8(buffer).map_err(internal)
}

fn internal(e: impl std::fmt::Display) -> ProbeError {
    ProbeError::Internal(format!("metrics: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_metrics_render_all_families() {
        let m = ExporterMetrics::new(ScanPolicy::Recursive).unwrap();
        let out = m.render().unwrap();
        assert!(out.contains("folderprobe_probes_total{outcome=\"success\"} 0"));
        assert!(out.contains("# TYPE folderprobe_scan_duration_seconds histogram"));
        assert!(out.contains("scan_policy=\"recursive\""));
    }

    #[test]
    fn probe_outcomes_counted_independently() {
        let m = ExporterMetrics::new(ScanPolicy::Stat).unwrap();
        m.record_probe(ProbeOutcome::Success);
        m.record_probe(ProbeOutcome::Success);
        m.record_probe(ProbeOutcome::ScanError);

        assert_eq!(m.probes_total.with_label_values(&["success"]).get(), 2);
        assert_eq!(m.probes_total.with_label_values(&["scan_error"]).get(), 1);
        assert_eq!(m.probes_total.with_label_values(&["bad_request"]).get(), 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn process_metrics_exposed() {
        let out = ExporterMetrics::new(ScanPolicy::Recursive).unwrap().render().unwrap();
        assert!(out.contains("process_cpu_seconds_total"));
        assert!(out.contains("process_open_fds"));
    }

    #[test]
    fn scan_duration_observed() {
        let m = ExporterMetrics::new(ScanPolicy::Recursive).unwrap();
        m.observe_scan(Duration::from_millis(20));
        assert_eq!(m.scan_duration.get_sample_count(), 1);
    }

    #[test]
    fn outcome_from_error() {
        assert_eq!(
            ProbeOutcome::from_error(&ProbeError::MissingTarget),
            ProbeOutcome::BadRequest
        );
        assert_eq!(
            ProbeOutcome::from_error(&ProbeError::Internal("x".into())),
            ProbeOutcome::Internal
        );
        let scan = ProbeError::scan("/x", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(ProbeOutcome::from_error(&scan), ProbeOutcome::ScanError);
    }

    #[test]
    fn empty_registry_renders_empty() {
        assert_eq!(render_registry(&Registry::new()).unwrap(), "");
    }
}
