//! Top-level facade crate for hostgauge.
//!
//! Re-exports the core model and the exporter library so users can depend on a single crate.

pub mod core {
    pub use hostgauge_core::*;
}

pub mod exporter {
    pub use hostgauge_exporter::*;
}
