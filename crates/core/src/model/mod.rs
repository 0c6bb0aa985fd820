mod flashcard;
mod ids;
mod quiz;
mod session;

pub use flashcard::Flashcard;
pub use ids::RevealKey;
pub use quiz::{Question, Quiz, SectionKind};
pub use session::{ScanSession, Screen};
