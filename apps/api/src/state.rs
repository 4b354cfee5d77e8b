use crate::analysis::GeminiClient;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: GeminiClient,
}
