mod config;
mod errors;
mod ideas;
mod llm_client;
mod models;
mod quiz;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::ideas::generator::IdeaGenerator;
use crate::llm_client::GeminiClient;
use crate::quiz::catalog::QuestionCatalog;
use crate::quiz::scoring::ProfileScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Launchpad API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize question catalog
    let catalog = Arc::new(QuestionCatalog::standard()?);
    info!("Question catalog loaded ({} questions)", catalog.questions().len());

    // Initialize LLM client
    let llm = GeminiClient::new(
        config.google_ai_api_key.clone(),
        &config.google_ai_base_url,
        &config.google_ai_model,
    )?;
    if llm.is_configured() {
        info!("LLM client initialized (model: {})", config.google_ai_model);
    } else {
        warn!("GOOGLE_AI_API_KEY is not set; idea generation requests will fail");
    }

    // Build app state
    let state = AppState {
        catalog,
        scorer: ProfileScorer::new(),
        generator: IdeaGenerator::new(Arc::new(llm)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins to the mobile and web clients

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
