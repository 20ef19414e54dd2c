mod graphql;
mod server;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use cinegraph_store::{
    state::{try_init_state_from_uri, DATABASE_URI_ENV_VAR},
    store::CatalogStore,
};
use clap::{Parser, ValueHint};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    graphql::build_schema,
    server::{build_router, AppState},
};

/// The command-line arguments.
#[derive(Debug, Parser)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000, value_name = "PORT")]
    port: u16,

    #[arg(
        long = "connection-uri",
        env = DATABASE_URI_ENV_VAR,
        value_name = "URI",
        value_hint = ValueHint::Url
    )]
    connection_uri: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = try_init_state_from_uri(args.connection_uri.as_ref())
        .await
        .context("failed to initialize database connection")?;
    let store: Arc<dyn CatalogStore> = Arc::new(state);

    // The driver connects lazily; ping up front so a bad URI shows up at
    // startup instead of on the first query.
    match store.ping().await {
        Ok(()) => info!("connected to database"),
        Err(error) => warn!(%error, "database is not reachable yet"),
    }

    let schema = build_schema(store.clone());
    let app = build_router(AppState { schema, store });

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr).await?;
    info!("listening for requests on port {}", args.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
