use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interview_api::config::Config;
use interview_api::db::{create_pool, run_migrations};
use interview_api::interview::store::PgReviewStore;
use interview_api::llm_client::{self, GeminiClient};
use interview_api::routes::build_router;
use interview_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("interview_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (lazy; persistence is best-effort)
    let db = create_pool(&config.database_url)?;
    run_migrations(&db).await;

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_base_url.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState::new(Arc::new(llm), Arc::new(PgReviewStore::new(db)));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
