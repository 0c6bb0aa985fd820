use std::path::Path;

use chrono::Utc;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use coach_core::model::{Flashcard, Quiz, ScanSession};
use services::{ArtifactSink, NoteImage};

use crate::context::AppContext;
use crate::routes::Route;

/// Bridges the orchestrator's per-branch deliveries into the shared session
/// signal. Each callback runs on the UI task, so slot writes never interleave
/// mid-render regardless of arrival order.
struct SessionSink {
    session: Signal<ScanSession>,
}

impl ArtifactSink for SessionSink {
    fn quiz_ready(&self, quiz: Quiz) {
        let mut session = self.session;
        session.write().set_quiz(quiz);
    }

    fn summary_ready(&self, summary: String) {
        let mut session = self.session;
        session.write().set_summary(summary);
    }

    fn flashcards_ready(&self, cards: Vec<Flashcard>) {
        let mut session = self.session;
        session.write().set_flashcards(cards);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ScanState {
    Idle,
    Scanning,
    Failed(String),
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<ScanSession>>();
    let navigator = use_navigator();
    let mut image_path = use_signal(String::new);
    let mut scan_state = use_signal(|| ScanState::Idle);

    let scanning = scan_state() == ScanState::Scanning;

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Scan your notes" }
                p { class: "view-subtitle",
                    "Take a photo of handwritten or printed notes and get a quiz, a summary, and flashcards."
                }
            }
            div { class: "view-divider" }

            div { class: "scan-form",
                label { class: "scan-label", r#for: "image-path", "Photo of your notes" }
                input {
                    id: "image-path",
                    class: "scan-input",
                    r#type: "text",
                    placeholder: "/path/to/notes.jpg",
                    value: "{image_path()}",
                    oninput: move |evt| image_path.set(evt.value()),
                }
                button {
                    class: "btn btn-primary scan-button",
                    r#type: "button",
                    disabled: scanning,
                    onclick: move |_| {
                        let study = ctx.study();
                        let path = image_path().trim().to_string();
                        if path.is_empty() {
                            scan_state.set(ScanState::Failed(
                                "Choose a photo of your notes first.".to_string(),
                            ));
                            return;
                        }
                        let mut session = session;
                        let mut scan_state = scan_state;
                        // The generation fan-out must survive navigating away
                        // from this view, so the task is owned by the root
                        // scope rather than this component.
                        spawn_forever(async move {
                            scan_state.set(ScanState::Scanning);
                            let bytes = match std::fs::read(&path) {
                                Ok(bytes) => bytes,
                                Err(err) => {
                                    scan_state.set(ScanState::Failed(format!(
                                        "Could not read {path}: {err}"
                                    )));
                                    return;
                                }
                            };
                            let filename = Path::new(&path)
                                .file_name()
                                .map(|name| name.to_string_lossy().into_owned())
                                .unwrap_or_else(|| "notes.jpg".to_string());

                            match study.scan_notes(NoteImage::new(bytes, filename)).await {
                                Ok(text) => {
                                    scan_state.set(ScanState::Idle);
                                    session.write().begin_results(text.clone(), Utc::now());
                                    let _ = navigator.push(Route::Results {});
                                    study.generate_all(&text, &SessionSink { session }).await;
                                    session.write().settle();
                                }
                                // Extraction failure is fatal to the session:
                                // stay home and show a blocking alert.
                                Err(err) => scan_state.set(ScanState::Failed(err.to_string())),
                            }
                        });
                    },
                    if scanning { "Scanning..." } else { "Scan notes" }
                }
            }

            if let ScanState::Failed(message) = scan_state() {
                div { class: "modal-overlay",
                    div { class: "modal alert-modal",
                        h3 { class: "modal-title", "Scan failed" }
                        p { class: "modal-body", "{message}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| scan_state.set(ScanState::Idle),
                            "OK"
                        }
                    }
                }
            }
        }
    }
}
