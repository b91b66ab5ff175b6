mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::documents::{DocumentStore, MemoryDocumentStore, PgDocumentStore};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Postgres when configured; otherwise documents live only as long as the process.
    let store: Arc<dyn DocumentStore> = match &config.database_url {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .expect("database init failed");
            Arc::new(PgDocumentStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; reservations are kept in memory only");
            Arc::new(MemoryDocumentStore::new())
        }
    };
    tracing::info!(backend = store.backend(), collection = %config.collection, "document store ready");

    let state = state::AppState::new(store, &config.collection);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos not configured; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "reservas listening");
    axum::serve(listener, app).await.expect("server failed");
}
