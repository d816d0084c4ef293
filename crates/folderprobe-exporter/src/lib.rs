//! folderprobe exporter library entry.
//!
//! Wires config, application state, the probe handler, and the operational
//! endpoints into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod probe;
pub mod router;
