#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod api;
mod auth;
mod config;

use api::results::delete_results;
use api::typebots::{create_typebot, list_typebots};
use api::webhook_blocks::list_webhook_blocks;
use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get},
};
use botflow_core::{AppCore, paths};
use config::ServerConfig;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> axum::Json<Health> {
    axum::Json(Health {
        status: "botflow is working!".to_string(),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,botflow_server=debug".into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Botflow backend server");

    let db_path =
        paths::ensure_database_path_string().expect("Failed to determine Botflow database path");
    let core = Arc::new(AppCore::new(&db_path).expect("Failed to initialize app core"));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(health))
        // Typebot management; unsupported verbs fall out as 405
        .route("/api/typebots", get(list_typebots).post(create_typebot))
        .route(
            "/api/typebots/{typebot_id}/webhookBlocks",
            get(list_webhook_blocks),
        )
        .route("/api/typebots/{typebot_id}/results", delete(delete_results))
        .layer(cors)
        .with_state(core);

    let config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .expect("Failed to bind server address");

    tracing::info!("Botflow running on http://{}:{}", config.host, config.port);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
