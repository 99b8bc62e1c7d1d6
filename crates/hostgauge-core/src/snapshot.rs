//! Point-in-time host readings.

use crate::error::{HostGaugeError, Result};

/// One scrape's worth of host readings. Built, rendered, dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSnapshot {
    pub cpu_usage_percent: f32,
    pub memory_total_bytes: u64,
    pub memory_used_bytes: u64,
    pub disk_total_bytes: u64,
    pub disk_used_bytes: u64,
}

impl MetricSnapshot {
    /// Reject readings that break the used <= total / 0..=100 bounds.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.cpu_usage_percent) {
            return Err(HostGaugeError::Sample(format!(
                "cpu usage out of range: {}",
                self.cpu_usage_percent
            )));
        }
        if self.memory_used_bytes > self.memory_total_bytes {
            return Err(HostGaugeError::Sample(format!(
                "memory used ({}) exceeds total ({})",
                self.memory_used_bytes, self.memory_total_bytes
            )));
        }
        if self.disk_used_bytes > self.disk_total_bytes {
            return Err(HostGaugeError::Sample(format!(
                "disk used ({}) exceeds total ({})",
                self.disk_used_bytes, self.disk_total_bytes
            )));
        }
        Ok(())
    }
}

/// Normalize a raw CPU reading into 0..=100. NaN becomes 0.
pub fn clamp_percent(raw: f32) -> f32 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 100.0)
    }
}

/// Clamp, then round to one decimal place (`12.345` -> `12.3`).
pub fn round_percent(raw: f32) -> f32 {
    (clamp_percent(raw) * 10.0).round() / 10.0
}
