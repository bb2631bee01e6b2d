use crate::llm::GeminiClient;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured; handlers then serve built-in
    /// sample resumes.
    pub generator: Option<GeminiClient>,
}
