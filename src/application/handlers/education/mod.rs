//! Education handlers.
//!
//! ## Commands
//! - Submitting quiz answers (shape-checked, not graded)
//!
//! ## Queries
//! - Education overview
//! - Quiz module questions

mod get_education_overview;
mod get_quiz_module;
mod submit_quiz_answers;

// Commands
pub use submit_quiz_answers::{
    SubmitQuizAnswersCommand, SubmitQuizAnswersHandler, SubmitQuizAnswersResult,
};

// Queries
pub use get_education_overview::GetEducationOverviewHandler;
pub use get_quiz_module::{GetQuizModuleHandler, GetQuizModuleQuery, GetQuizModuleResult};
