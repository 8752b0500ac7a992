use std::{net::SocketAddr, path::Path};

use tokio::{net::TcpListener, task::JoinHandle};
use tracing_subscriber::EnvFilter;

use crate::{error::AppError, router, state::AppContext, util::parse::parse_port};

/// Installs the global tracing subscriber.
///
/// Defaults to `info` unless `RUST_LOG` says otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A running HTTP server.
pub struct ServerHandle {
    /// Address the listener is bound to.
    pub local_addr: SocketAddr,

    /// Task driving `axum::serve`.
    pub task: JoinHandle<()>,
}

/// Binds `0.0.0.0:port` and serves the router in a spawned task.
///
/// # Arguments
/// - `context` - Application context used as router state
/// - `port` - Port to bind; 0 picks an ephemeral port
/// - `static_dir` - Directory served at `/`
///
/// # Returns
/// - `Ok(ServerHandle)` - Listener bound and serving
/// - `Err(AppError::IoErr)` - Failed to bind the listener
pub async fn start_server(
    context: AppContext,
    port: u16,
    static_dir: &Path,
) -> Result<ServerHandle, AppError> {
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;
    let local_addr = listener.local_addr()?;

    let app = router::router(static_dir).with_state(context);

    let task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tracing::info!("Serving {} on http://{}", static_dir.display(), local_addr);

    Ok(ServerHandle { local_addr, task })
}

/// Starts the HTTP server when running in production with a usable port.
///
/// Every failure here is logged and swallowed: the bot keeps running without the
/// HTTP server.
///
/// # Arguments
/// - `context` - Application context
/// - `port_arg` - Raw first positional startup argument
/// - `static_dir` - Directory served at `/`
///
/// # Returns
/// - `Some(ServerHandle)` - Server started
/// - `None` - Not in production mode, bad port argument, or bind failure
pub async fn start_optional_server(
    context: &AppContext,
    port_arg: Option<&str>,
    static_dir: &Path,
) -> Option<ServerHandle> {
    match try_start_optional_server(context, port_arg, static_dir).await {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!("HTTP server not started: {}", e);
            None
        }
    }
}

/// Fallible core of [`start_optional_server`].
///
/// # Returns
/// - `Ok(Some(ServerHandle))` - Server started
/// - `Ok(None)` - Not in production mode
/// - `Err(AppError::PortErr)` - Port argument missing or invalid
/// - `Err(AppError::IoErr)` - Failed to bind the listener
async fn try_start_optional_server(
    context: &AppContext,
    port_arg: Option<&str>,
    static_dir: &Path,
) -> Result<Option<ServerHandle>, AppError> {
    if !context.config.is_production() {
        tracing::debug!("Not in production mode, HTTP server disabled");
        return Ok(None);
    }

    let port = parse_port(port_arg)?;
    let handle = start_server(context.clone(), port, static_dir).await?;

    Ok(Some(handle))
}
