use dioxus::prelude::*;
use dioxus_router::use_navigator;

use coach_core::model::{RevealKey, ScanSession, SectionKind};
use services::SpeechOptions;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_quiz_sections;

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<ScanSession>>();
    let navigator = use_navigator();

    let (generating, source_text, scanned_label, summary_text, quiz_sections, flashcards, has_any) = {
        let snapshot = session.read();
        (
            snapshot.is_generating(),
            snapshot.source_text().to_string(),
            snapshot
                .scanned_at()
                .map(|at| at.format("%H:%M").to_string()),
            snapshot.summary().map(str::to_string),
            snapshot
                .quiz()
                .map(map_quiz_sections)
                .unwrap_or_default(),
            snapshot.flashcards().to_vec(),
            snapshot.has_any_artifact(),
        )
    };

    let speech_for_summary = ctx.speech();
    let summary_for_speech = summary_text.clone();

    let quiz_blocks = quiz_sections.into_iter().map(|section| {
        let title = section.title;
        let question_cards = section.questions.into_iter().map(|question| {
            let key = question.key;
            let revealed = session.read().is_revealed(key);
            let selected = session.read().selected_option(key);
            let speech = ctx.speech();
            let prompt_for_speech = question.prompt.clone();
            let correct_option = question
                .correct_answer
                .and_then(|correct| question.options.get(correct).cloned());

            let option_buttons = question.options.iter().map(|option| {
                let option = option.clone();
                let option_index = option.index;
                let mut session = session;
                let is_selected = selected == Some(option_index);
                let is_correct = question.correct_answer == Some(option_index);
                let class = option_class(is_selected, revealed, is_correct);
                rsx! {
                    button {
                        class: "{class}",
                        r#type: "button",
                        onclick: move |_| session.write().select_option(key, option_index),
                        span { class: "option-letter", "{option.letter}" }
                        span { class: "option-label", "{option.label}" }
                    }
                }
            });

            let mut session_for_reveal = session;
            rsx! {
                div { class: "question-card",
                    div { class: "question-head",
                        p { class: "question-prompt", "{question.number}. {question.prompt}" }
                        button {
                            class: "btn btn-ghost speak-button",
                            r#type: "button",
                            title: "Read aloud",
                            onclick: move |_| {
                                speech.speak(&prompt_for_speech, &SpeechOptions::default());
                            },
                            "🔊"
                        }
                    }
                    if let Some(hint) = question.hint.as_ref() {
                        p { class: "question-hint", "Hint: {hint}" }
                    }
                    if !question.options.is_empty() {
                        div { class: "question-options", {option_buttons} }
                    }
                    button {
                        class: "btn btn-secondary reveal-button",
                        r#type: "button",
                        onclick: move |_| session_for_reveal.write().toggle_reveal(key),
                        if revealed { "Hide answer" } else { "Show answer" }
                    }
                    if revealed {
                        if let Some(option) = correct_option.as_ref() {
                            p { class: "question-answer",
                                "Correct answer: {option.letter}. {option.label}"
                            }
                        }
                        if let Some(answer) = question.answer.as_ref() {
                            p { class: "question-answer", "Answer: {answer}" }
                        }
                        if let Some(explanation) = question.explanation.as_ref() {
                            p { class: "question-explanation", "{explanation}" }
                        }
                        if !question.key_points.is_empty() {
                            ul { class: "question-key-points",
                                for point in question.key_points.iter() {
                                    li { "{point}" }
                                }
                            }
                        }
                    }
                }
            }
        });
        rsx! {
            section { class: "results-section quiz-section",
                h3 { class: "section-title", "{title}" }
                {question_cards}
            }
        }
    });

    let flashcard_tiles = flashcards.iter().enumerate().map(|(index, card)| {
        let key = RevealKey::new(SectionKind::Flashcard, index);
        let flipped = session.read().is_revealed(key);
        let mut session = session;
        let face = if flipped {
            card.back.clone()
        } else {
            card.front.clone()
        };
        rsx! {
            button {
                class: if flipped { "flashcard flashcard--flipped" } else { "flashcard" },
                r#type: "button",
                onclick: move |_| session.write().toggle_reveal(key),
                span { class: "flashcard-text", "{face}" }
            }
        }
    });

    rsx! {
        div { class: "page results-page",
            header { class: "view-header results-header",
                h2 { class: "view-title", "Study materials" }
                if let Some(label) = scanned_label {
                    p { class: "view-subtitle", "Scanned at {label}" }
                }
                button {
                    class: "btn btn-secondary back-button",
                    r#type: "button",
                    onclick: move |_| {
                        let mut session = session;
                        session.write().reset();
                        let _ = navigator.push(Route::Home {});
                    },
                    "Scan another"
                }
            }
            div { class: "view-divider" }

            if generating {
                div { class: "busy-banner", "Generating quiz, summary, and flashcards..." }
            }

            if !source_text.is_empty() {
                details { class: "source-text",
                    summary { "Scanned text" }
                    p { "{source_text}" }
                }
            }

            if let Some(text) = summary_text.as_ref() {
                section { class: "results-section summary-section",
                    div { class: "section-head",
                        h3 { class: "section-title", "Summary" }
                        button {
                            class: "btn btn-ghost speak-button",
                            r#type: "button",
                            title: "Read aloud",
                            onclick: move |_| {
                                if let Some(text) = summary_for_speech.as_ref() {
                                    speech_for_summary.speak(text, &SpeechOptions::default());
                                }
                            },
                            "🔊"
                        }
                    }
                    p { class: "summary-text", "{text}" }
                }
            }

            {quiz_blocks}

            if !flashcards.is_empty() {
                section { class: "results-section flashcards-section",
                    h3 { class: "section-title", "Flashcards" }
                    div { class: "flashcard-grid", {flashcard_tiles} }
                }
            }

            if !generating && !has_any {
                p { class: "results-empty",
                    "No study materials arrived for this scan. Go back and try another photo."
                }
            }
        }
    }
}

fn option_class(is_selected: bool, revealed: bool, is_correct: bool) -> String {
    let mut class = String::from("option-button");
    if is_selected {
        class.push_str(" option-button--selected");
    }
    if revealed {
        if is_correct {
            class.push_str(" option-button--correct");
        } else if is_selected {
            class.push_str(" option-button--missed");
        }
    }
    class
}
