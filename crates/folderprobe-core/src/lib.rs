//! folderprobe core: freshness scanning, elapsed-time math, and the shared error type.
//!
//! This crate answers "when was this path last modified?" and carries no HTTP
//! or runtime dependencies, so the scanner can be reused outside the exporter.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every filesystem failure surfaces as `ProbeError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod elapsed;
pub mod error;
pub mod scan;

/// Shared result type.
pub use error::{ProbeError, Result};
pub use scan::{FreshnessScanner, RecursiveWalk, ScanPolicy, SingleStat};
