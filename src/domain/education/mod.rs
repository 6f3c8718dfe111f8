//! Education module - Comprehensive Education content.
//!
//! - `module` - the closed [`QuizModule`] selector
//! - `question` - question records and kinds
//! - `content` - fixed question tables (the quiz-module rule)
//! - `answers` - shape checks for submitted answers (no grading)
//! - `overview` - videos, module list and progress tracker

mod answers;
mod content;
mod module;
mod overview;
mod question;

pub use answers::{record_quiz_answers, AnswerReceipt, QuestionAnswer, QuizAnswer, QuizSubmission};
pub use content::get_quiz_module;
pub use module::QuizModule;
pub use overview::{
    education_overview, EducationOverview, LearningVideo, ModuleSummary, ProgressTracker,
    ProgressView,
};
pub use question::{QuestionKind, QuestionRecord, QuizModuleContent, ScaleBounds};
