use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::assistant::ResumeAssistant;
use crate::config::Config;
use crate::usage::UsageGate;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled once at startup from the configured heuristic tables.
    pub analyzer: Arc<ResumeAnalyzer>,
    /// Pluggable assistant backend. Default: GeminiAssistant.
    pub assistant: Arc<dyn ResumeAssistant>,
    pub usage_gate: Arc<UsageGate>,
}
