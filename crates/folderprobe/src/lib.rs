//! Top-level facade crate for folderprobe.
//!
//! Re-exports the scanner core and the exporter library so users can depend on a single crate.

pub mod core {
    pub use folderprobe_core::*;
}

pub mod exporter {
    pub use folderprobe_exporter::*;
}
