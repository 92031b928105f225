use std::sync::Arc;

use crate::ideas::generator::IdeaGenerator;
use crate::quiz::catalog::QuestionCatalog;
use crate::quiz::scoring::ProfileScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every component is built once in `main`; nothing here is a global.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<QuestionCatalog>,
    pub scorer: ProfileScorer,
    /// Wraps the single LLM transport. Tests swap in a canned `TextGenerator`.
    pub generator: IdeaGenerator,
}
