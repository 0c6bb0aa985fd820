use coach_core::model::{Question, Quiz, RevealKey, SectionKind};

/// One option row of a multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub key: RevealKey,
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub correct_answer: Option<usize>,
    pub explanation: Option<String>,
    pub answer: Option<String>,
    pub hint: Option<String>,
    pub key_points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSectionVm {
    pub kind: SectionKind,
    pub title: &'static str,
    pub questions: Vec<QuestionVm>,
}

/// Maps a normalized quiz into renderable sections, skipping empty buckets.
#[must_use]
pub fn map_quiz_sections(quiz: &Quiz) -> Vec<QuizSectionVm> {
    [
        (SectionKind::MultipleChoice, "Multiple Choice"),
        (SectionKind::FillBlank, "Fill in the Blank"),
        (SectionKind::ShortAnswer, "Short Answer"),
    ]
    .into_iter()
    .filter_map(|(kind, title)| {
        let questions = quiz.section(kind);
        if questions.is_empty() {
            return None;
        }
        Some(QuizSectionVm {
            kind,
            title,
            questions: questions
                .iter()
                .enumerate()
                .map(|(index, question)| map_question(kind, index, question))
                .collect(),
        })
    })
    .collect()
}

fn map_question(kind: SectionKind, index: usize, question: &Question) -> QuestionVm {
    QuestionVm {
        key: RevealKey::new(kind, index),
        number: index + 1,
        prompt: question.prompt.clone(),
        options: question
            .options
            .iter()
            .enumerate()
            .map(|(index, label)| OptionVm {
                index,
                letter: option_letter(index),
                label: label.clone(),
            })
            .collect(),
        correct_answer: question.correct_answer,
        explanation: question.explanation.clone(),
        answer: question.answer.clone(),
        hint: question.hint.clone(),
        key_points: question.key_points.clone(),
    }
}

fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| (b'A' + i) as char)
}
