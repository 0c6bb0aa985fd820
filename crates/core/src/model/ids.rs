use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::SectionKind;

/// Composite identifier for one interactive item on the results screen:
/// the section it belongs to plus its position within that section.
///
/// Reveal and selection state are keyed by this, so toggling one question
/// never touches another even while artifacts are still arriving.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealKey {
    kind: SectionKind,
    index: usize,
}

impl RevealKey {
    /// Creates a key for the item at `index` within `kind`.
    #[must_use]
    pub fn new(kind: SectionKind, index: usize) -> Self {
        Self { kind, index }
    }

    #[must_use]
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Debug for RevealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RevealKey({:?}, {})", self.kind, self.index)
    }
}

impl fmt::Display for RevealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.wire_name(), self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_for_different_sections_are_distinct() {
        let a = RevealKey::new(SectionKind::MultipleChoice, 0);
        let b = RevealKey::new(SectionKind::FillBlank, 0);
        assert_ne!(a, b);
    }

    #[test]
    fn display_includes_section_and_index() {
        let key = RevealKey::new(SectionKind::ShortAnswer, 3);
        assert_eq!(key.to_string(), "short_answer-3");
    }
}
