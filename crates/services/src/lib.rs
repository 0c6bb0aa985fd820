#![forbid(unsafe_code)]

pub mod api_client;
pub mod config;
pub mod error;
pub mod feedback;
pub mod study_service;

pub use api_client::{ApiClient, NoteImage, QuizType, StudyBackend};
pub use config::ApiConfig;
pub use error::{ApiConfigError, ApiError};
pub use feedback::{
    ALL_SETTLED_PULSE_MS, FLASHCARDS_READY_PULSE_MS, Haptics, QUIZ_READY_PULSE_MS,
    SUMMARY_READY_PULSE_MS, SilentFeedback, Speech, SpeechOptions,
};
pub use study_service::{ArtifactSink, StudyService};
