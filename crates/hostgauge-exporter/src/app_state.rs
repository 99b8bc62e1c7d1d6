//! Shared application state for the exporter.
//!
//! Holds only the metric source. Cloned into every request; nothing mutable
//! lives here.

use std::sync::Arc;

use crate::config::ExporterConfig;
use crate::sampler::{MetricSource, SystemSampler};

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn MetricSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn MetricSource>) -> Self {
        Self { source }
    }

    /// State backed by the real host sampler.
    pub fn from_config(cfg: &ExporterConfig) -> Self {
        Self::new(Arc::new(SystemSampler::from_config(cfg)))
    }

    pub fn source(&self) -> &dyn MetricSource {
        self.source.as_ref()
    }
}
