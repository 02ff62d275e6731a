//! dawdle server binary.
//!
//! Demo service with exactly two routes:
//! - `/metrics` : Prometheus exposition of request count + latency summary
//! - anything else : 200 `Hello World\n` after a random 0-99ms pause
//!
//! No flags, no environment config, no config file. Bind or serve
//! failure is fatal: log and exit non-zero.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing_subscriber::{fmt, EnvFilter};

use dawdle_core::{DawdleError, Result};
use dawdle_server::{app_state::AppState, obs, router};

/// Fixed listen address.
const LISTEN: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(err) = run().await {
        tracing::error!(%err, "dawdle-server exiting");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let handle = obs::metrics::install_recorder()?;
    let state = AppState::new(handle);
    let app = router::build_router(state);

    tracing::info!(listen = %LISTEN, "dawdle-server starting");
    let listener = tokio::net::TcpListener::bind(LISTEN)
        .await
        .map_err(|source| DawdleError::Bind {
            addr: LISTEN,
            source,
        })?;

    axum::serve(listener, app).await.map_err(DawdleError::Serve)
}
