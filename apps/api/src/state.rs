use std::sync::Arc;

use crate::config::Config;
use crate::cv::compiler::LatexCompiler;
use crate::llm_client::TextGenerator;
use crate::profile::ProfileApiClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<SessionStore>,
    pub profile_api: ProfileApiClient,
    /// Pluggable generation backend. Production wires `GenerationClient`;
    /// tests swap in a scripted fake.
    pub generator: Arc<dyn TextGenerator>,
    pub compiler: LatexCompiler,
}
