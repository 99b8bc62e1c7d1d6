//! Test metric sources.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use hostgauge_core::error::{HostGaugeError, Result};
use hostgauge_core::MetricSnapshot;
use hostgauge_exporter::app_state::AppState;
use hostgauge_exporter::sampler::MetricSource;

pub fn example_snapshot() -> MetricSnapshot {
    MetricSnapshot {
        cpu_usage_percent: 42.5,
        memory_total_bytes: 16_000_000_000,
        memory_used_bytes: 8_000_000_000,
        disk_total_bytes: 256_000_000_000,
        disk_used_bytes: 100_000_000_000,
    }
}

pub struct FixedSource(pub MetricSnapshot);

#[async_trait]
impl MetricSource for FixedSource {
    async fn sample(&self) -> Result<MetricSnapshot> {
        Ok(self.0)
    }
}

pub struct FailingSource;

#[async_trait]
impl MetricSource for FailingSource {
    async fn sample(&self) -> Result<MetricSnapshot> {
        Err(HostGaugeError::Sample("statvfs / failed: EACCES".into()))
    }
}

pub struct PanickingSource;

#[async_trait]
impl MetricSource for PanickingSource {
    async fn sample(&self) -> Result<MetricSnapshot> {
        panic!("sensor exploded");
    }
}

/// Panics on the first call, then behaves like [`FixedSource`].
#[derive(Default)]
pub struct PanicOnceSource {
    tripped: AtomicBool,
}

#[async_trait]
impl MetricSource for PanicOnceSource {
    async fn sample(&self) -> Result<MetricSnapshot> {
        if !self.tripped.swap(true, Ordering::SeqCst) {
            panic!("first scrape blows up");
        }
        Ok(example_snapshot())
    }
}

/// Signals `started` on entry, then takes `delay` to answer.
pub struct SlowSource {
    pub started: Arc<Notify>,
    pub delay: Duration,
}

#[async_trait]
impl MetricSource for SlowSource {
    async fn sample(&self) -> Result<MetricSnapshot> {
        self.started.notify_one();
        tokio::time::sleep(self.delay).await;
        Ok(example_snapshot())
    }
}

pub fn state<S: MetricSource>(source: S) -> AppState {
    AppState::new(Arc::new(source))
}
