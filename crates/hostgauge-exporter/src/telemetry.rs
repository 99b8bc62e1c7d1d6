//! Log pipeline construction.
//!
//! Built once by the binary from [`LogConfig`]; library code only emits
//! `tracing` events.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hostgauge_core::error::{HostGaugeError, Result};

use crate::config::{LogConfig, LogFormat};

const DEFAULT_FILTER: &str = "info";

pub fn env_filter(cfg: &LogConfig) -> Result<EnvFilter> {
    match cfg.filter.as_deref() {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| HostGaugeError::Config(format!("invalid RUST_LOG `{directives}`: {e}"))),
        None => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install the process-wide subscriber. Fails if one is already set.
pub fn init(cfg: &LogConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(cfg)?);
    let installed = match cfg.format {
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };
    installed.map_err(|e| HostGaugeError::Config(format!("logging init failed: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn bad_directive_is_config_error() {
        let cfg = LogConfig {
            format: LogFormat::Text,
            filter: Some("hostgauge=notalevel".into()),
        };
        let err = env_filter(&cfg).unwrap_err();
        assert_eq!(err.code().as_str(), "CONFIG");
    }

    #[test]
    fn default_filter_is_info() {
        let filter = env_filter(&LogConfig::default()).unwrap();
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing::level_filters::LevelFilter::INFO)
        );
    }
}
