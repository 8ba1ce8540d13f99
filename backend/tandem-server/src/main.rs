use tandem_chat::{ChatDirectory, StreamChatClient};
use tandem_config::{Config, ConfigError};
use tandem_server::error::Result as ServerErrorResult;
use tandem_server::logger::{self, LogSink};
use tandem_server::{AppState, ChatReconciler, ShutdownCoordinator, build_router};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional; real environment variables win
    let dotenv_result = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let sink = match config.log_file_path()? {
        Some(path) => LogSink::File(path),
        None => LogSink::Stdout {
            colored: config.logging.colored,
        },
    };
    logger::initialize(config.logging.level, sink)?;

    info!("Starting tandem-server v{}", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv_result {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    info!("Running database migrations...");
    tandem_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // Secrets are checked by validate(); re-check instead of unwrapping
    let jwt_secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;
    let api_key = config
        .chat
        .api_key
        .as_deref()
        .ok_or_else(|| ConfigError::chat("chat.api_key is required"))?;
    let api_secret = config
        .chat
        .api_secret
        .as_deref()
        .ok_or_else(|| ConfigError::chat("chat.api_secret is required"))?;

    let chat: Arc<dyn ChatDirectory> = Arc::new(StreamChatClient::new(
        &config.chat.base_url,
        api_key,
        api_secret,
        Duration::from_secs(config.chat.timeout_secs),
    )?);

    let secure_cookies = config.auth.secure_cookies();
    if !secure_cookies {
        warn!("Session cookies are not Secure ({} mode)", config.auth.environment);
    }

    // Build application state
    let app_state = AppState::new(pool.clone(), jwt_secret.as_bytes(), chat.clone(), secure_cookies);

    let shutdown = ShutdownCoordinator::new();

    // Background retry of failed chat upserts
    let reconciler = ChatReconciler::new(
        pool,
        chat,
        Duration::from_secs(config.chat.reconcile_interval_secs),
        config.chat.reconcile_batch_size,
    )
    .spawn(shutdown.subscribe());

    // Build router
    let app = build_router(app_state, &config.server.cors_origins);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Start server with graceful shutdown
    let mut server_shutdown = shutdown.subscribe();
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = server_shutdown.recv().await;
        })
        .await?;

    if let Err(e) = reconciler.await {
        warn!("Chat reconciler task ended abnormally: {}", e);
    }
    info!("Graceful shutdown complete");

    Ok(())
}
