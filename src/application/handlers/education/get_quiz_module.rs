//! GetQuizModuleHandler - Query handler for a module's questions.

use tracing::debug;

use crate::domain::education::{get_quiz_module, QuizModule, QuizModuleContent};

#[derive(Debug, Clone, Copy)]
pub struct GetQuizModuleQuery {
    pub module: QuizModule,
}

pub type GetQuizModuleResult = QuizModuleContent;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetQuizModuleHandler;

impl GetQuizModuleHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetQuizModuleQuery) -> GetQuizModuleResult {
        let content = get_quiz_module(query.module);
        debug!(
            module = query.module.key(),
            questions = content.questions.len(),
            "Served quiz module"
        );
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_returns_requested_module() {
        let content = GetQuizModuleHandler::new().handle(GetQuizModuleQuery {
            module: QuizModule::MentalHealth,
        });
        assert_eq!(content.module, QuizModule::MentalHealth);
        assert_eq!(content.title, "Mental Health");
    }
}
