use std::sync::Arc;

use futures::join;
use tracing::{debug, warn};

use coach_core::model::{Flashcard, Quiz};

use crate::api_client::{NoteImage, QuizType, StudyBackend};
use crate::error::ApiError;
use crate::feedback::{
    ALL_SETTLED_PULSE_MS, FLASHCARDS_READY_PULSE_MS, Haptics, QUIZ_READY_PULSE_MS,
    SUMMARY_READY_PULSE_MS,
};

/// Receives artifacts the moment their branch of the fan-out resolves.
///
/// Implementations must be correct under any arrival order, including none of
/// the three methods ever being called.
pub trait ArtifactSink {
    fn quiz_ready(&self, quiz: Quiz);
    fn summary_ready(&self, summary: String);
    fn flashcards_ready(&self, cards: Vec<Flashcard>);
}

/// Drives a scan session: text extraction up front, then the three-way
/// generation fan-out.
pub struct StudyService {
    backend: Arc<dyn StudyBackend>,
    haptics: Arc<dyn Haptics>,
}

impl StudyService {
    #[must_use]
    pub fn new(backend: Arc<dyn StudyBackend>, haptics: Arc<dyn Haptics>) -> Self {
        Self { backend, haptics }
    }

    /// Extracts text from a notes photo.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when extraction fails. Unlike generation failures,
    /// this one is fatal to the session: the caller surfaces it as a blocking
    /// alert and never enters the results screen.
    pub async fn scan_notes(&self, image: NoteImage) -> Result<String, ApiError> {
        self.backend.scan_notes(image).await
    }

    /// Runs the three generation requests concurrently and delivers each
    /// result through `sink` the instant it resolves.
    ///
    /// The three branches carry no ordering dependency; a failed branch is
    /// logged and delivers nothing, without disturbing the other two. The
    /// join below waits for all three to settle, so this function returning
    /// is the signal that the busy flag can clear. Only then does the
    /// all-settled pulse fire.
    pub async fn generate_all(&self, text: &str, sink: &dyn ArtifactSink) {
        let quiz = async {
            match self.backend.generate_quiz(text, QuizType::All).await {
                Ok(quiz) => {
                    debug!(questions = quiz.question_count(), "quiz ready");
                    sink.quiz_ready(quiz);
                    self.haptics.pulse(QUIZ_READY_PULSE_MS);
                }
                Err(err) => warn!(error = %err, "quiz generation failed"),
            }
        };
        let summary = async {
            match self.backend.generate_summary(text).await {
                Ok(summary) => {
                    debug!(chars = summary.len(), "summary ready");
                    sink.summary_ready(summary);
                    self.haptics.pulse(SUMMARY_READY_PULSE_MS);
                }
                Err(err) => warn!(error = %err, "summary generation failed"),
            }
        };
        let flashcards = async {
            match self.backend.generate_flashcards(text).await {
                Ok(cards) => {
                    debug!(cards = cards.len(), "flashcards ready");
                    sink.flashcards_ready(cards);
                    self.haptics.pulse(FLASHCARDS_READY_PULSE_MS);
                }
                Err(err) => warn!(error = %err, "flashcard generation failed"),
            }
        };

        join!(quiz, summary, flashcards);
        self.haptics.pulse(ALL_SETTLED_PULSE_MS);
    }
}
