use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Section of the results screen an interactive item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    MultipleChoice,
    FillBlank,
    ShortAnswer,
    Flashcard,
}

impl SectionKind {
    /// The backend's spelling for this section, also used in composite keys.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            SectionKind::MultipleChoice => "multiple_choice",
            SectionKind::FillBlank => "fill_blank",
            SectionKind::ShortAnswer => "short_answer",
            SectionKind::Flashcard => "flashcard",
        }
    }
}

/// One generated quiz question.
///
/// Only the prompt is guaranteed; every other field depends on the question
/// style the backend produced. Multiple-choice entries carry `options` and
/// `correct_answer`, fill-blank entries carry `answer` and sometimes `hint`,
/// short-answer entries carry `answer` and `key_points`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<usize>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
}

impl Question {
    /// Creates a bare question with just a prompt. Mostly useful in tests.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: Vec::new(),
            correct_answer: None,
            explanation: None,
            answer: None,
            hint: None,
            key_points: Vec::new(),
        }
    }
}

/// Normalized quiz payload: one bucket per question style.
///
/// The generation endpoint is loose about shape. Depending on the model run
/// it returns `{"multiple_choice": [...], "fill_blank": [...], ...}`, a bare
/// array of questions, or `{"questions": [...]}`. [`Quiz::from_value`] is the
/// single place that disambiguation happens; everything downstream sees only
/// this struct.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub multiple_choice: Vec<Question>,
    #[serde(default)]
    pub fill_blank: Vec<Question>,
    #[serde(default)]
    pub short_answer: Vec<Question>,
}

const BUCKET_KEYS: [(&str, SectionKind); 3] = [
    ("multiple_choice", SectionKind::MultipleChoice),
    ("fill_blank", SectionKind::FillBlank),
    ("short_answer", SectionKind::ShortAnswer),
];

impl Quiz {
    /// Normalizes whatever the backend sent into the canonical bucket shape.
    ///
    /// Entries that are not objects, or whose `question` field is missing or
    /// blank, are dropped silently; a payload that matches none of the known
    /// shapes yields an empty quiz rather than an error.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut quiz = Quiz::default();

        if let Some(map) = value.as_object() {
            if BUCKET_KEYS.iter().any(|(key, _)| map.contains_key(*key)) {
                for (key, kind) in BUCKET_KEYS {
                    if let Some(entries) = map.get(key).and_then(Value::as_array) {
                        for entry in entries {
                            if let Some(question) = parse_question(entry) {
                                quiz.bucket_mut(kind).push(question);
                            }
                        }
                    }
                }
                return quiz;
            }
            if let Some(entries) = map.get("questions").and_then(Value::as_array) {
                quiz.classify_all(entries);
                return quiz;
            }
        }

        if let Some(entries) = value.as_array() {
            quiz.classify_all(entries);
        }
        quiz
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.multiple_choice.is_empty() && self.fill_blank.is_empty() && self.short_answer.is_empty()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.multiple_choice.len() + self.fill_blank.len() + self.short_answer.len()
    }

    /// Questions for one section. `Flashcard` is not a quiz section and
    /// always yields an empty slice.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> &[Question] {
        match kind {
            SectionKind::MultipleChoice => &self.multiple_choice,
            SectionKind::FillBlank => &self.fill_blank,
            SectionKind::ShortAnswer => &self.short_answer,
            SectionKind::Flashcard => &[],
        }
    }

    fn bucket_mut(&mut self, kind: SectionKind) -> &mut Vec<Question> {
        match kind {
            SectionKind::MultipleChoice => &mut self.multiple_choice,
            SectionKind::FillBlank => &mut self.fill_blank,
            // Flashcards never come through the quiz payload.
            SectionKind::ShortAnswer | SectionKind::Flashcard => &mut self.short_answer,
        }
    }

    fn classify_all(&mut self, entries: &[Value]) {
        for entry in entries {
            if let Some(question) = parse_question(entry) {
                self.bucket_mut(classify(&question)).push(question);
            }
        }
    }
}

/// Picks a bucket for a question arriving without a section label.
fn classify(question: &Question) -> SectionKind {
    if !question.options.is_empty() {
        SectionKind::MultipleChoice
    } else if !question.key_points.is_empty() {
        SectionKind::ShortAnswer
    } else if question.answer.is_some() {
        SectionKind::FillBlank
    } else {
        SectionKind::ShortAnswer
    }
}

fn parse_question(entry: &Value) -> Option<Question> {
    let question: Question = serde_json::from_value(entry.clone()).ok()?;
    if question.prompt.trim().is_empty() {
        return None;
    }
    Some(question)
}
