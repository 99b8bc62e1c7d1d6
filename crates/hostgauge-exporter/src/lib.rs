//! hostgauge exporter library entry.
//!
//! Wires config, the host sampler, and the HTTP surface into a scrape
//! endpoint. Consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod sampler;
pub mod server;
pub mod telemetry;
