use async_trait::async_trait;
use reqwest::{Client, Response, multipart};
use serde::{Deserialize, Serialize};
use tracing::debug;

use coach_core::model::{Flashcard, Quiz};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Image bytes picked by the user, ready for upload.
#[derive(Clone, Debug)]
pub struct NoteImage {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl NoteImage {
    /// The capture pipeline always hands over JPEG data.
    pub const MIME: &'static str = "image/jpeg";

    #[must_use]
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
        }
    }
}

/// Which question styles to ask the backend for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizType {
    MultipleChoice,
    FillBlank,
    ShortAnswer,
    #[default]
    All,
}

impl QuizType {
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            QuizType::MultipleChoice => "multiple_choice",
            QuizType::FillBlank => "fill_blank",
            QuizType::ShortAnswer => "short_answer",
            QuizType::All => "all",
        }
    }
}

/// The four backend operations the app is built on. The orchestrator and the
/// UI depend on this seam, not on the concrete client, so tests can substitute
/// a scripted backend.
#[async_trait]
pub trait StudyBackend: Send + Sync {
    /// Extracts text from a photo of notes.
    async fn scan_notes(&self, image: NoteImage) -> Result<String, ApiError>;

    /// Generates quiz questions from extracted text.
    async fn generate_quiz(&self, text: &str, quiz_type: QuizType) -> Result<Quiz, ApiError>;

    /// Generates a prose summary from extracted text.
    async fn generate_summary(&self, text: &str) -> Result<String, ApiError>;

    /// Generates flashcards from extracted text.
    async fn generate_flashcards(&self, text: &str) -> Result<Vec<Flashcard>, ApiError>;
}

/// HTTP client for the study coach gateway.
///
/// One attempt per request, no retries; timeouts are whatever the transport
/// enforces. All failure modes normalize into [`ApiError`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Connection-level failures become `Unreachable` with the configured
    /// base URL in the message; everything else propagates verbatim.
    fn normalize(&self, err: reqwest::Error) -> ApiError {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            ApiError::Unreachable {
                base_url: self.config.base_url().to_string(),
                source: err,
            }
        } else {
            ApiError::Transport(err)
        }
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|err| self.normalize(err))?;
        check_status(response).await
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http { status, body })
}

fn require_text(text: &str) -> Result<&str, ApiError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ApiError::EmptyText);
    }
    Ok(trimmed)
}

fn rejected(message: Option<String>, fallback: &str) -> ApiError {
    ApiError::Rejected(message.unwrap_or_else(|| fallback.to_string()))
}

#[derive(Debug, Serialize)]
struct GenerateQuizRequest<'a> {
    text: &'a str,
    quiz_type: &'static str,
}

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScanEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    text: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuizEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    quiz: serde_json::Value,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlashcardsEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    flashcards: Vec<Flashcard>,
    #[serde(default)]
    message: Option<String>,
}

#[async_trait]
impl StudyBackend for ApiClient {
    async fn scan_notes(&self, image: NoteImage) -> Result<String, ApiError> {
        debug!(filename = %image.filename, bytes = image.bytes.len(), "uploading notes image");
        let part = multipart::Part::bytes(image.bytes)
            .file_name(image.filename)
            .mime_str(NoteImage::MIME)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.config.endpoint("/api/scan"))
            .multipart(form)
            .send()
            .await
            .map_err(|err| self.normalize(err))?;
        let envelope: ScanEnvelope = check_status(response).await?.json().await?;
        if !envelope.success {
            return Err(rejected(envelope.message, "text extraction failed"));
        }
        debug!(chars = envelope.text.len(), "extracted text");
        Ok(envelope.text)
    }

    async fn generate_quiz(&self, text: &str, quiz_type: QuizType) -> Result<Quiz, ApiError> {
        let text = require_text(text)?;
        let body = GenerateQuizRequest {
            text,
            quiz_type: quiz_type.wire_name(),
        };
        let envelope: QuizEnvelope = self.post_json("/api/generate_quiz", &body).await?.json().await?;
        if !envelope.success {
            return Err(rejected(envelope.message, "quiz generation failed"));
        }
        let quiz = Quiz::from_value(&envelope.quiz);
        debug!(questions = quiz.question_count(), "quiz payload normalized");
        Ok(quiz)
    }

    async fn generate_summary(&self, text: &str) -> Result<String, ApiError> {
        let text = require_text(text)?;
        let body = TextRequest { text };
        let envelope: SummaryEnvelope = self.post_json("/api/summary", &body).await?.json().await?;
        if !envelope.success {
            return Err(rejected(envelope.message, "summary generation failed"));
        }
        Ok(envelope.summary)
    }

    async fn generate_flashcards(&self, text: &str) -> Result<Vec<Flashcard>, ApiError> {
        let text = require_text(text)?;
        let body = TextRequest { text };
        let envelope: FlashcardsEnvelope = self
            .post_json("/api/generate_flashcards", &body)
            .await?
            .json()
            .await?;
        if !envelope.success {
            return Err(rejected(envelope.message, "flashcard generation failed"));
        }
        Ok(envelope
            .flashcards
            .into_iter()
            .filter(Flashcard::is_renderable)
            .collect())
    }
}
