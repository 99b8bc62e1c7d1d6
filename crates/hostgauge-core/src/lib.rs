//! hostgauge core: the snapshot model, its text exposition, and the shared
//! error surface.
//!
//! This crate carries no runtime, HTTP, or OS dependencies so the rendering
//! contract can be tested in isolation from the exporter.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here; fallible paths
//! surface as `HostGaugeError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;
pub mod snapshot;

pub use error::{ErrorCode, HostGaugeError, Result};
pub use snapshot::MetricSnapshot;
