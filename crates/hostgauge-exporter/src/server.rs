//! Listener lifecycle.
//!
//! `Exporter::bind` takes the server from idle to listening; `serve` runs the
//! accept loop until the shutdown future resolves, then waits for in-flight
//! requests before returning.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use hostgauge_core::error::{HostGaugeError, Result};

use crate::{app_state::AppState, config::ExporterConfig, router};

pub struct Exporter {
    listener: TcpListener,
    local_addr: SocketAddr,
    app: Router,
}

impl Exporter {
    /// Bind the configured address. Not retried on failure.
    pub async fn bind(cfg: &ExporterConfig, state: AppState) -> Result<Self> {
        let listen = cfg.listen();
        let listener = TcpListener::bind((cfg.host.as_str(), cfg.port))
            .await
            .map_err(bind_error(&listen))?;
        let local_addr = listener.local_addr().map_err(bind_error(&listen))?;

        tracing::info!(%local_addr, "exporter running on http://{listen}/");
        Ok(Self {
            listener,
            local_addr,
            app: router::build_router(state),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("exporter stopped");
        Ok(())
    }
}

/// Any failure before the listener is ready is a bind failure.
fn bind_error(listen: &str) -> impl Fn(io::Error) -> HostGaugeError + '_ {
    move |source| HostGaugeError::Bind {
        addr: listen.to_string(),
        source,
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down the exporter");
}
