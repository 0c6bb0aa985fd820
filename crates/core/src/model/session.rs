use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::{Flashcard, Quiz, RevealKey};

/// Which screen the app is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Results,
}

/// All state for one scan session, owned by the UI layer.
///
/// The three artifact slots are written independently as each generation
/// request resolves, in whatever order the network produces; the view renders
/// whichever subset is populated at the time. Nothing here is persisted:
/// going back home wipes the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanSession {
    screen: Screen,
    source_text: String,
    scanned_at: Option<DateTime<Utc>>,
    quiz: Option<Quiz>,
    summary: Option<String>,
    flashcards: Vec<Flashcard>,
    generating: bool,
    revealed: HashMap<RevealKey, bool>,
    selected: HashMap<RevealKey, usize>,
}

impl ScanSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh results session from freshly extracted text.
    ///
    /// Clears every artifact slot and both interaction maps first, so stale
    /// results from a previous scan can never bleed into this one. The
    /// results screen is entered immediately, before any artifact exists.
    pub fn begin_results(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.quiz = None;
        self.summary = None;
        self.flashcards.clear();
        self.revealed.clear();
        self.selected.clear();
        self.source_text = text.into();
        self.scanned_at = Some(now);
        self.screen = Screen::Results;
        self.generating = true;
    }

    /// Back to home: everything resets, including reveal/selection maps.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_quiz(&mut self, quiz: Quiz) {
        self.quiz = Some(quiz);
    }

    pub fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
    }

    pub fn set_flashcards(&mut self, cards: Vec<Flashcard>) {
        self.flashcards = cards;
    }

    /// Marks the generation fan-out as fully settled. Only the join over all
    /// three requests may call this; individual arrivals do not.
    pub fn settle(&mut self) {
        self.generating = false;
    }

    /// Flips the reveal state for one item. Applying it twice restores the
    /// original value.
    pub fn toggle_reveal(&mut self, key: RevealKey) {
        let entry = self.revealed.entry(key).or_insert(false);
        *entry = !*entry;
    }

    /// Records the chosen option for a multiple-choice question.
    /// Re-selecting the stored index leaves the map unchanged.
    pub fn select_option(&mut self, key: RevealKey, option: usize) {
        self.selected.insert(key, option);
    }

    #[must_use]
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.get(&key).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn selected_option(&self, key: RevealKey) -> Option<usize> {
        self.selected.get(&key).copied()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub fn scanned_at(&self) -> Option<DateTime<Utc>> {
        self.scanned_at
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// True when at least one artifact has arrived.
    #[must_use]
    pub fn has_any_artifact(&self) -> bool {
        self.quiz.as_ref().is_some_and(|quiz| !quiz.is_empty())
            || self.summary.is_some()
            || !self.flashcards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionKind;
    use crate::time::fixed_now;

    fn key(index: usize) -> RevealKey {
        RevealKey::new(SectionKind::MultipleChoice, index)
    }

    #[test]
    fn begin_results_clears_previous_artifacts() {
        let mut session = ScanSession::new();
        session.begin_results("first scan", fixed_now());
        session.set_summary("old summary".into());
        session.set_flashcards(vec![Flashcard::new("f", "b")]);
        session.toggle_reveal(key(0));
        session.select_option(key(0), 1);

        session.begin_results("second scan", fixed_now());
        assert_eq!(session.screen(), Screen::Results);
        assert!(session.is_generating());
        assert!(session.summary().is_none());
        assert!(session.flashcards().is_empty());
        assert!(!session.is_revealed(key(0)));
        assert_eq!(session.selected_option(key(0)), None);
        assert_eq!(session.source_text(), "second scan");
    }

    #[test]
    fn results_screen_renders_with_no_artifacts() {
        let mut session = ScanSession::new();
        session.begin_results("text", fixed_now());
        assert!(!session.has_any_artifact());
        session.settle();
        assert!(!session.is_generating());
        assert!(!session.has_any_artifact());
    }

    #[test]
    fn slots_populate_in_any_arrival_order() {
        let mut session = ScanSession::new();
        session.begin_results("text", fixed_now());

        session.set_flashcards(vec![Flashcard::new("front", "back")]);
        assert!(session.has_any_artifact());
        assert!(session.is_generating());

        session.set_summary("a summary".into());
        session.set_quiz(Quiz::default());
        session.settle();

        assert_eq!(session.flashcards().len(), 1);
        assert_eq!(session.summary(), Some("a summary"));
        assert!(session.quiz().is_some());
        assert!(!session.is_generating());
    }

    #[test]
    fn reveal_toggle_is_idempotent_when_applied_twice() {
        let mut session = ScanSession::new();
        assert!(!session.is_revealed(key(2)));
        session.toggle_reveal(key(2));
        assert!(session.is_revealed(key(2)));
        session.toggle_reveal(key(2));
        assert!(!session.is_revealed(key(2)));
    }

    #[test]
    fn reveal_keys_are_independent_across_sections() {
        let mut session = ScanSession::new();
        let mc = RevealKey::new(SectionKind::MultipleChoice, 1);
        let fb = RevealKey::new(SectionKind::FillBlank, 1);
        session.toggle_reveal(mc);
        assert!(session.is_revealed(mc));
        assert!(!session.is_revealed(fb));
    }

    #[test]
    fn reselecting_the_same_option_is_a_no_op() {
        let mut session = ScanSession::new();
        session.select_option(key(0), 2);
        session.select_option(key(0), 2);
        assert_eq!(session.selected_option(key(0)), Some(2));
        session.select_option(key(0), 3);
        assert_eq!(session.selected_option(key(0)), Some(3));
    }

    #[test]
    fn reset_returns_to_home() {
        let mut session = ScanSession::new();
        session.begin_results("text", fixed_now());
        session.set_summary("summary".into());
        session.toggle_reveal(key(0));
        session.reset();
        assert_eq!(session, ScanSession::new());
        assert_eq!(session.screen(), Screen::Home);
    }
}
