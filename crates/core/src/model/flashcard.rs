use serde::{Deserialize, Serialize};

/// One flashcard: a prompt on the front, the answer on the back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
}

impl Flashcard {
    #[must_use]
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// A card without a usable front is dropped rather than rendered blank.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.front.trim().is_empty()
    }
}
