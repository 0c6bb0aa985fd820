use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use coach_core::model::{Flashcard, Quiz, ScanSession};
use services::{
    ApiError, NoteImage, QuizType, SilentFeedback, Speech, StudyBackend, StudyService,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, ResultsView};

/// Backend that never succeeds. The smoke tests only render; nothing should
/// reach the network.
struct OfflineBackend;

#[async_trait]
impl StudyBackend for OfflineBackend {
    async fn scan_notes(&self, _image: NoteImage) -> Result<String, ApiError> {
        Err(ApiError::Rejected("offline harness".to_string()))
    }

    async fn generate_quiz(&self, _text: &str, _quiz_type: QuizType) -> Result<Quiz, ApiError> {
        Err(ApiError::Rejected("offline harness".to_string()))
    }

    async fn generate_summary(&self, _text: &str) -> Result<String, ApiError> {
        Err(ApiError::Rejected("offline harness".to_string()))
    }

    async fn generate_flashcards(&self, _text: &str) -> Result<Vec<Flashcard>, ApiError> {
        Err(ApiError::Rejected("offline harness".to_string()))
    }
}

struct TestApp {
    study: Arc<StudyService>,
}

impl TestApp {
    fn new() -> Self {
        Self {
            study: Arc::new(StudyService::new(
                Arc::new(OfflineBackend),
                Arc::new(SilentFeedback),
            )),
        }
    }
}

impl UiApp for TestApp {
    fn study(&self) -> Arc<StudyService> {
        Arc::clone(&self.study)
    }

    fn speech(&self) -> Arc<dyn Speech> {
        Arc::new(SilentFeedback)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Results,
}

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    view: ViewKind,
    session: ScanSession,
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp::new());
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let session = props.session.clone();
    use_context_provider(move || Signal::new(session));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, session: ScanSession) -> ViewHarness {
    let dom = VirtualDom::new_with_props(HarnessRoot, HarnessProps { view, session });
    ViewHarness { dom }
}
