use std::{future::Future, io, net::SocketAddr, sync::Arc};

use tokio::{net::TcpListener, sync::watch, task::JoinSet};
use tracing_subscriber::EnvFilter;

use crate::server::{
    bot, config::Config, error::AppError, platform::discord::SerenityPlatform, router,
    state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Filters with `RUST_LOG` when set, `info` otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Binds the HTTP listener.
///
/// # Arguments
/// - `addr` - Address the API listens on
///
/// # Returns
/// - `Ok(TcpListener)` - Listener ready to accept connections
/// - `Err(AppError::IoErr)` - The address is in use or not bindable
pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("HTTP API listening on {}", listener.local_addr()?);

    Ok(listener)
}

/// Runs the Discord client and the HTTP API until one of them stops or Ctrl-C.
///
/// Both run as tasks of one `JoinSet`. Whichever happens first (a task ending or
/// Ctrl-C) shuts the other down: the HTTP server through graceful shutdown, the
/// Discord client through its shard manager. Both tasks are awaited before
/// returning.
///
/// # Returns
/// - `Ok(())` - Both tasks stopped cleanly
/// - `Err(AppError)` - The first error returned by either task, or a startup failure
pub async fn run(config: Config) -> Result<(), AppError> {
    let discord = bot::start::init_bot(&config).await?;
    let shard_manager = discord.client.shard_manager.clone();

    let state = AppState::new(Arc::new(SerenityPlatform::new(discord.client.http.clone())));
    let listener = bind_listener(config.api_addr).await?;

    tracing::warn!(
        "HTTP API endpoints are unauthenticated; /ban_user and /send_message act with the bot's permissions"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut tasks = JoinSet::new();
    tasks.spawn(bot::start::start_bot(discord));
    tasks.spawn(serve(listener, state, shutdown_rx));

    let mut first_error = None;

    tokio::select! {
        result = tasks.join_next() => record_exit(result, &mut first_error),
        _ = interrupted(tokio::signal::ctrl_c()) => tracing::info!("Received Ctrl-C, shutting down"),
    }

    // The receiver is gone when the server already stopped
    let _ = shutdown_tx.send(true);
    shard_manager.shutdown_all().await;

    while let Some(result) = tasks.join_next().await {
        record_exit(Some(result), &mut first_error);
    }

    tracing::info!("Shutdown complete");

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Resolves when the signal fires.
///
/// If the signal handler cannot be installed the failure is logged and the future
/// never resolves, leaving shutdown to the supervised tasks.
async fn interrupted(signal: impl Future<Output = io::Result<()>>) {
    if let Err(err) = signal.await {
        tracing::error!("Failed to listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}

async fn serve(
    listener: TcpListener,
    state: AppState,
    mut shutdown: watch::Receiver<bool>,
) -> Result<(), AppError> {
    let app = router::router().with_state(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.changed().await;
        })
        .await?;

    Ok(())
}

/// Logs a task exit, keeping the first error.
fn record_exit(
    result: Option<Result<Result<(), AppError>, tokio::task::JoinError>>,
    first_error: &mut Option<AppError>,
) {
    let err = match result {
        None | Some(Ok(Ok(()))) => return,
        Some(Ok(Err(err))) => err,
        Some(Err(err)) => AppError::from(err),
    };

    tracing::error!("Task failed: {}", err);

    if first_error.is_none() {
        *first_error = Some(err);
    }
}
