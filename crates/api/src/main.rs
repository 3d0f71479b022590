use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::config::ServerConfig;
use folio_api::mail::{Mailer, SmtpMailer};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_store::ProjectStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "folio_api=debug,folio_store=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_dir = %config.data_dir.display(),
        id_strategy = ?config.id_strategy,
        reorder_mode = ?config.reorder_mode,
        admin_gate = config.admin_token.is_some(),
        "Loaded server configuration"
    );
    if config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set; catalog mutations are open to any caller");
    }

    // --- Catalog store ---
    let store = Arc::new(ProjectStore::new(&config.data_dir));
    folio_store::health_check(&store)
        .await
        .expect("Catalog storage health check failed");
    tracing::info!(path = %store.path().display(), "Catalog storage ready");

    // --- Mailer ---
    let mailer: Option<Arc<dyn Mailer>> = match config.email.clone() {
        Some(email) => {
            let mailer = SmtpMailer::new(email).expect("Invalid SMTP configuration");
            tracing::info!("Contact mailer configured");
            Some(Arc::new(mailer) as Arc<dyn Mailer>)
        }
        None => {
            tracing::warn!("SMTP_HOST not set; contact form delivery disabled");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        mailer,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
