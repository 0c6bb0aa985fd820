use std::sync::Arc;

use services::{Speech, StudyService};

/// What the composition root (`crates/app`, or a test harness) hands to the
/// UI: the study orchestrator plus the speech capability for read-back.
pub trait UiApp: Send + Sync {
    fn study(&self) -> Arc<StudyService>;
    fn speech(&self) -> Arc<dyn Speech>;
}

#[derive(Clone)]
pub struct AppContext {
    study: Arc<StudyService>,
    speech: Arc<dyn Speech>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            study: app.study(),
            speech: app.speech(),
        }
    }

    #[must_use]
    pub fn study(&self) -> Arc<StudyService> {
        Arc::clone(&self.study)
    }

    #[must_use]
    pub fn speech(&self) -> Arc<dyn Speech> {
        Arc::clone(&self.speech)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
