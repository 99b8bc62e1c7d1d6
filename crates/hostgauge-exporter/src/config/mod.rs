//! Exporter config loader (environment variables, strict parsing).
//!
//! Missing variables fall back to defaults; present but malformed ones are
//! errors. Nothing is read at import time: callers build the config once and
//! hand it to the server.

pub mod schema;

use std::time::Duration;

use hostgauge_core::error::{HostGaugeError, Result};

pub use schema::{ExporterConfig, LogConfig, LogFormat};

pub const ENV_HOST: &str = "EXPORTER_HOST";
pub const ENV_PORT: &str = "EXPORTER_PORT";
pub const ENV_DISK_PATH: &str = "EXPORTER_DISK_PATH";
pub const ENV_CPU_WINDOW_MS: &str = "EXPORTER_CPU_WINDOW_MS";
pub const ENV_LOG_FORMAT: &str = "EXPORTER_LOG_FORMAT";
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

pub fn from_env() -> Result<ExporterConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build a config from an arbitrary variable source.
pub fn from_lookup<F>(lookup: F) -> Result<ExporterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = ExporterConfig::default();

    if let Some(host) = lookup(ENV_HOST) {
        cfg.host = host.trim().to_string();
    }
    if let Some(port) = lookup(ENV_PORT) {
        cfg.port = parse_port(&port)?;
    }
    if let Some(path) = lookup(ENV_DISK_PATH) {
        cfg.disk_path = path;
    }
    if let Some(ms) = lookup(ENV_CPU_WINDOW_MS) {
        let ms: u64 = ms.trim().parse().map_err(|e| {
            HostGaugeError::Config(format!("{ENV_CPU_WINDOW_MS} must be an integer: {e}"))
        })?;
        cfg.cpu_window = Duration::from_millis(ms);
    }
    if let Some(format) = lookup(ENV_LOG_FORMAT) {
        cfg.log.format = format.parse()?;
    }
    cfg.log.filter = lookup(ENV_LOG_FILTER).filter(|f| !f.trim().is_empty());

    cfg.validate()?;
    Ok(cfg)
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|e| {
        HostGaugeError::Config(format!("{ENV_PORT} must be a port number, got `{raw}`: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ExporterConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn parse_port_trims_whitespace() {
        assert_eq!(parse_port(" 9100\n").ok(), Some(9100));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(parse_port("70000").is_err());
        assert!(parse_port("-1").is_err());
    }

    #[test]
    fn blank_rust_log_means_default_filter() {
        let cfg = load(&[("RUST_LOG", "  ")]).ok();
        assert_eq!(cfg.map(|c| c.log.filter), Some(None));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(load(&[("EXPORTER_LOG_FORMAT", "xml")]).is_err());
        let cfg = load(&[("EXPORTER_LOG_FORMAT", "JSON")]).ok();
        assert_eq!(cfg.map(|c| c.log.format), Some(LogFormat::Json));
    }
}
