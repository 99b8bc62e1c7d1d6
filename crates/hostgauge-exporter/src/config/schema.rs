use std::time::Duration;

use hostgauge_core::error::{HostGaugeError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    pub host: String,
    pub port: u16,

    /// Filesystem reported as `disk_*`.
    pub disk_path: String,

    /// How long CPU usage is measured over, per scrape.
    pub cpu_window: Duration,

    pub log: LogConfig,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            disk_path: default_disk_path(),
            cpu_window: default_cpu_window(),
            log: LogConfig::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(HostGaugeError::Config("EXPORTER_HOST must not be empty".into()));
        }
        if self.disk_path.is_empty() {
            return Err(HostGaugeError::Config("EXPORTER_DISK_PATH must not be empty".into()));
        }
        if self.cpu_window > Duration::from_secs(10) {
            return Err(HostGaugeError::Config(
                "EXPORTER_CPU_WINDOW_MS must be at most 10000".into(),
            ));
        }
        Ok(())
    }

    /// `host:port` as configured (not resolved).
    pub fn listen(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = HostGaugeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(HostGaugeError::Config(format!(
                "EXPORTER_LOG_FORMAT must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives; `None` means `info`.
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            filter: None,
        }
    }
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".into()
}
pub(crate) fn default_port() -> u16 {
    8081
}
pub(crate) fn default_disk_path() -> String {
    "/".into()
}
pub(crate) fn default_cpu_window() -> Duration {
    Duration::from_millis(200)
}
