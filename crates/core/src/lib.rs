#![forbid(unsafe_code)]

pub mod model;
pub mod time;

pub use model::{
    Flashcard, Question, Quiz, RevealKey, ScanSession, Screen, SectionKind,
};
