//! Host metric sampling.
//!
//! `MetricSource` is the seam between HTTP and the OS. The production source,
//! [`SystemSampler`], owns no mutable state: each call builds fresh `sysinfo`
//! handles and a fresh `statvfs` read, so concurrent scrapes never contend.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System, MINIMUM_CPU_UPDATE_INTERVAL};

use hostgauge_core::error::{HostGaugeError, Result};
use hostgauge_core::snapshot::{round_percent, MetricSnapshot};

use crate::config::ExporterConfig;

#[async_trait]
pub trait MetricSource: Send + Sync + 'static {
    async fn sample(&self) -> Result<MetricSnapshot>;
}

#[derive(Debug, Clone)]
pub struct SystemSampler {
    disk_path: PathBuf,
    cpu_window: Duration,
}

impl SystemSampler {
    /// `cpu_window` is raised to the OS minimum if shorter.
    pub fn new(disk_path: impl Into<PathBuf>, cpu_window: Duration) -> Self {
        Self {
            disk_path: disk_path.into(),
            cpu_window: cpu_window.max(MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    pub fn from_config(cfg: &ExporterConfig) -> Self {
        Self::new(&cfg.disk_path, cfg.cpu_window)
    }

    pub fn cpu_window(&self) -> Duration {
        self.cpu_window
    }

    /// Blocking read of all five readings. Sleeps for the CPU window.
    pub fn sample_blocking(&self) -> Result<MetricSnapshot> {
        let host = read_cpu_and_memory(self.cpu_window)?;
        let (disk_total_bytes, disk_used_bytes) = disk_usage(&self.disk_path)?;

        let snapshot = MetricSnapshot {
            cpu_usage_percent: host.cpu_percent,
            memory_total_bytes: host.memory_total,
            memory_used_bytes: host.memory_total.saturating_sub(host.memory_available),
            disk_total_bytes,
            disk_used_bytes,
        };
        snapshot.validate()?;

        tracing::debug!(
            cpu = snapshot.cpu_usage_percent,
            mem_used = snapshot.memory_used_bytes,
            disk_used = snapshot.disk_used_bytes,
            "host sampled"
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl MetricSource for SystemSampler {
    async fn sample(&self) -> Result<MetricSnapshot> {
        let sampler = self.clone();
        tokio::task::spawn_blocking(move || sampler.sample_blocking())
            .await
            .map_err(|e| HostGaugeError::Sample(format!("sampler task failed: {e}")))?
    }
}

struct CpuMemory {
    cpu_percent: f32,
    memory_total: u64,
    memory_available: u64,
}

fn read_cpu_and_memory(window: Duration) -> Result<CpuMemory> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(HostGaugeError::Sample(
            "cpu/memory readings are not supported on this platform".into(),
        ));
    }

    let mut sys = System::new_with_specifics(
        RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram()),
    );
    // Usage is a delta between two refreshes.
    std::thread::sleep(window);
    sys.refresh_cpu_usage();
    sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());

    let memory_total = sys.total_memory();
    if memory_total == 0 {
        return Err(HostGaugeError::Sample("total memory reported as zero".into()));
    }

    Ok(CpuMemory {
        cpu_percent: round_percent(sys.global_cpu_usage()),
        memory_total,
        memory_available: sys.available_memory(),
    })
}

/// (total, used) bytes of the filesystem holding `path`.
#[cfg(unix)]
fn disk_usage(path: &Path) -> Result<(u64, u64)> {
    let stat = nix::sys::statvfs::statvfs(path).map_err(|e| {
        HostGaugeError::Sample(format!("statvfs {} failed: {e}", path.display()))
    })?;

    let frsize = stat.fragment_size() as u64;
    let total = (stat.blocks() as u64).saturating_mul(frsize);
    let free = (stat.blocks_free() as u64).saturating_mul(frsize);
    Ok((total, total.saturating_sub(free)))
}

#[cfg(not(unix))]
fn disk_usage(path: &Path) -> Result<(u64, u64)> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    disks
        .list()
        .iter()
        .filter(|d| path.starts_with(d.mount_point()))
        .max_by_key(|d| d.mount_point().as_os_str().len())
        .map(|d| {
            let total = d.total_space();
            (total, total.saturating_sub(d.available_space()))
        })
        .ok_or_else(|| {
            HostGaugeError::Sample(format!("no mounted disk holds {}", path.display()))
        })
}
