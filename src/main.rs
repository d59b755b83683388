use std::process::ExitCode;
use std::sync::Arc;

use backoffice::config::Config;
use backoffice::session::{MemorySessionSource, PgSessionSource, SessionSource};
use backoffice::state::AppState;
use backoffice::{db, routes};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Without a provider database, sessions resolve against an empty in-process source.
    let sessions: Arc<dyn SessionSource> = match config.database_url.as_deref() {
        Some(url) => match db::init_pool(url, config.db_max_connections).await {
            Ok(pool) => {
                tracing::info!(max_connections = config.db_max_connections, "session database connected");
                Arc::new(PgSessionSource::new(pool))
            }
            Err(e) => {
                tracing::error!(error = %e, "session database connection failed");
                return ExitCode::FAILURE;
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set; every request is treated as signed out");
            Arc::new(MemorySessionSource::new())
        }
    };

    let port = config.port;
    let app = routes::app(AppState::new(config, sessions));
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "backoffice listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
