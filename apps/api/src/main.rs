mod config;
mod content;
mod cv;
mod errors;
mod llm_client;
mod profile;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cv::compiler::LatexCompiler;
use crate::llm_client::retry::RetryPolicy;
use crate::llm_client::{GenerationClient, TextGenerator};
use crate::profile::ProfileApiClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting career content API v{}", env!("CARGO_PKG_VERSION"));

    let profile_api = ProfileApiClient::new(config.profile_api_url.clone());
    info!("Profile API client initialized");

    let generator: Arc<dyn TextGenerator> = Arc::new(GenerationClient::new(
        config.generation_api_url.clone(),
        config.generation_api_key.clone(),
        RetryPolicy::default(),
    ));
    info!("Generation client initialized");

    let compiler = LatexCompiler::new(config.latex_compile_url.clone(), config.editor_url.clone());
    let sessions = Arc::new(SessionStore::new());

    let state = AppState {
        config: config.clone(),
        sessions,
        profile_api,
        generator,
        compiler,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
