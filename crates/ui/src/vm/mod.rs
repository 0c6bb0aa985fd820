mod quiz_vm;

pub use quiz_vm::{OptionVm, QuestionVm, QuizSectionVm, map_quiz_sections};
