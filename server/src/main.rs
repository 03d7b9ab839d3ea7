mod config;
mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::pg_store::PgStore;
use services::store::{ChatStore, MemoryStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Postgres when configured; otherwise an in-memory store seeded like a fresh database.
    let store: Arc<dyn ChatStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url).await.expect("database init failed");
            tracing::info!("using postgres store");
            Arc::new(PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; appointments are kept in memory only");
            Arc::new(MemoryStore::seeded())
        }
    };

    if config.email.is_none() {
        tracing::warn!("RESEND_API_KEY not set; booking notifications disabled");
    }

    let state = state::AppState::new(store, &config);
    let app = routes::leptos_app(state).expect("failed to build app");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, default_client = %config.default_client, "receptionist listening");
    axum::serve(listener, app).await.expect("server failed");
}
