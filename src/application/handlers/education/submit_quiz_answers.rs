//! SubmitQuizAnswersHandler - Command handler for quiz answer intake.
//!
//! Answers are shape-checked and acknowledged. Nothing is graded or kept.

use tracing::{debug, warn};

use crate::domain::education::{record_quiz_answers, AnswerReceipt, QuizModule, QuizSubmission};
use crate::domain::foundation::DomainError;

#[derive(Debug, Clone)]
pub struct SubmitQuizAnswersCommand {
    pub module: QuizModule,
    pub submission: QuizSubmission,
}

pub type SubmitQuizAnswersResult = AnswerReceipt;

#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitQuizAnswersHandler;

impl SubmitQuizAnswersHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: SubmitQuizAnswersCommand,
    ) -> Result<SubmitQuizAnswersResult, DomainError> {
        let receipt = record_quiz_answers(command.module, &command.submission).map_err(|e| {
            warn!(module = command.module.key(), "Rejected quiz answers: {}", e);
            DomainError::from(e)
        })?;

        debug!(
            module = command.module.key(),
            answered = receipt.answered,
            unanswered = receipt.unanswered,
            "Quiz answers accepted"
        );
        Ok(receipt)
    }
}
