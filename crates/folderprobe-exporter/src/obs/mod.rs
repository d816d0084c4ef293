//! Process-wide operational metrics and text exposition rendering.
//!
//! Metrics live in an explicitly constructed `prometheus::Registry` owned by
//! `AppState`; the crate's global default registry is never touched.

pub mod metrics;
