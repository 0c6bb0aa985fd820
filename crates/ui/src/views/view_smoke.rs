use coach_core::model::{Flashcard, Question, Quiz, ScanSession};
use coach_core::time::fixed_now;

use super::test_harness::{ViewKind, setup_view_harness};

fn one_question_quiz() -> Quiz {
    let mut question = Question::new("What does photosynthesis produce?");
    question.options = vec![
        "Heat".into(),
        "Sound".into(),
        "Chemical energy".into(),
        "Mass".into(),
    ];
    question.correct_answer = Some(2);
    Quiz {
        multiple_choice: vec![question],
        ..Quiz::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_scan_form() {
    let mut harness = setup_view_harness(ViewKind::Home, ScanSession::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Scan notes"), "missing scan button in {html}");
    assert!(
        html.contains("Photo of your notes"),
        "missing input label in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_before_any_artifact_arrives() {
    let mut session = ScanSession::new();
    session.begin_results("Photosynthesis converts light to energy.", fixed_now());

    let mut harness = setup_view_harness(ViewKind::Results, session);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Generating quiz, summary, and flashcards"),
        "missing busy banner in {html}"
    );
    assert!(!html.contains("summary-section"), "stray summary in {html}");
    assert!(!html.contains("Flashcards"), "stray flashcards in {html}");
    assert!(
        !html.contains("No study materials arrived"),
        "empty state shown while busy in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_partial_subset() {
    let mut session = ScanSession::new();
    session.begin_results("Photosynthesis converts light to energy.", fixed_now());
    session.set_quiz(one_question_quiz());
    session.set_flashcards(vec![Flashcard::new(
        "Photosynthesis",
        "Converts light to energy",
    )]);
    session.settle();

    let mut harness = setup_view_harness(ViewKind::Results, session);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("What does photosynthesis produce?"),
        "missing question in {html}"
    );
    assert!(html.contains("Multiple Choice"), "missing section in {html}");
    assert!(html.contains("Flashcards"), "missing flashcards in {html}");
    assert!(
        !html.contains("summary-section"),
        "summary should be absent in {html}"
    );
    assert!(
        !html.contains("Generating quiz"),
        "busy banner should be gone in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_empty_state_when_everything_failed() {
    let mut session = ScanSession::new();
    session.begin_results("Photosynthesis converts light to energy.", fixed_now());
    session.settle();

    let mut harness = setup_view_harness(ViewKind::Results, session);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No study materials arrived"),
        "missing empty state in {html}"
    );
}
