//! hostgauge exporter
//!
//! Serves CPU, memory and disk gauges on `/` for scraping.
//! Configured from `EXPORTER_*` environment variables.

use std::process::ExitCode;

use hostgauge_core::error::Result;
use hostgauge_exporter::{
    app_state::AppState,
    config::{self, ExporterConfig, LogConfig},
    server::{self, Exporter},
    telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Still report through the log pipeline.
            let _ = telemetry::init(&LogConfig::default());
            tracing::error!(code = e.code().as_str(), "an error occurred: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init(&cfg.log) {
        eprintln!("hostgauge-exporter: {e}");
        return ExitCode::FAILURE;
    }

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "an error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: ExporterConfig) -> Result<()> {
    tracing::info!(listen = %cfg.listen(), "starting exporter");

    let state = AppState::from_config(&cfg);
    let exporter = Exporter::bind(&cfg, state).await?;
    exporter.serve(server::shutdown_signal()).await
}
