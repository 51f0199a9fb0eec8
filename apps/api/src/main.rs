mod analysis;
mod assistant;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod samples;
mod state;
mod usage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::ResumeAnalyzer;
use crate::assistant::GeminiAssistant;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::usage::UsageGate;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentBridge API v{}", env!("CARGO_PKG_VERSION"));

    // Compile analyzer heuristics once; custom tables replace the built-in ones
    let tables = config.load_heuristic_tables()?;
    let analyzer = Arc::new(ResumeAnalyzer::new(&tables)?);
    info!(
        "Resume analyzer ready ({} strong verbs, {} quantifier patterns, custom tables: {})",
        tables.strong_verbs.len(),
        tables.quantifiers.len(),
        config.analyzer_tables_path.is_some()
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let usage_gate = Arc::new(UsageGate::new(chrono::Duration::hours(
        config.usage_cooldown_hours,
    )));
    info!(
        "Usage cooldown: {}h, unlock code {}",
        usage_gate.cooldown().num_hours(),
        if config.unlock_code.is_some() { "configured" } else { "disabled" }
    );

    // Build app state
    let state = AppState {
        analyzer,
        assistant: Arc::new(GeminiAssistant(llm)),
        usage_gate,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser UI calls the API cross-origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
