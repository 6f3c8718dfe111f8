//! Quiz answer intake.
//!
//! Answers are checked for shape only: right kind, indices in range, scale
//! values inside bounds. There is no answer key and nothing is scored.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{get_quiz_module, QuestionKind, QuestionRecord, QuizModule};
use crate::domain::foundation::ValidationError;

/// A single answer, tagged with the widget kind that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuizAnswer {
    SingleChoice { option: usize },
    MultiChoice { options: Vec<usize> },
    Scale { value: i64 },
}

impl QuizAnswer {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuizAnswer::SingleChoice { .. } => QuestionKind::SingleChoice,
            QuizAnswer::MultiChoice { .. } => QuestionKind::MultiChoice,
            QuizAnswer::Scale { .. } => QuestionKind::Scale,
        }
    }
}

/// Answer to the question at position `question` (zero-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: usize,
    #[serde(flatten)]
    pub answer: QuizAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<QuestionAnswer>,
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerReceipt {
    pub module: QuizModule,
    pub answered: usize,
    pub unanswered: usize,
}

fn check_option(index: usize, question: &QuestionRecord) -> Result<(), ValidationError> {
    if index >= question.options.len() {
        return Err(ValidationError::out_of_range(
            "option",
            0,
            question.options.len() as i64 - 1,
            index as i64,
        ));
    }
    Ok(())
}

fn check_answer(answer: &QuizAnswer, question: &QuestionRecord) -> Result<(), ValidationError> {
    if answer.kind() != question.kind {
        return Err(ValidationError::invalid_format(
            "answer",
            format!("expected {:?}, got {:?}", question.kind, answer.kind()),
        ));
    }

    match answer {
        QuizAnswer::SingleChoice { option } => check_option(*option, question),
        QuizAnswer::MultiChoice { options } => {
            let mut seen = HashSet::new();
            for &option in options {
                check_option(option, question)?;
                if !seen.insert(option) {
                    return Err(ValidationError::invalid_format(
                        "options",
                        format!("option {} selected twice", option),
                    ));
                }
            }
            Ok(())
        }
        QuizAnswer::Scale { value } => match question.scale {
            Some(bounds) if bounds.contains(*value) => Ok(()),
            Some(bounds) => Err(ValidationError::out_of_range(
                "value", bounds.min, bounds.max, *value,
            )),
            None => Err(ValidationError::invalid_format(
                "answer",
                "question has no scale bounds",
            )),
        },
    }
}

/// Accepts a submission for `module` after checking every answer's shape.
///
/// Each question may be answered at most once; unanswered questions are fine.
pub fn record_quiz_answers(
    module: QuizModule,
    submission: &QuizSubmission,
) -> Result<AnswerReceipt, ValidationError> {
    let content = get_quiz_module(module);
    let total = content.questions.len();
    let mut answered = HashSet::new();

    for item in &submission.answers {
        let question = content.questions.get(item.question).ok_or_else(|| {
            ValidationError::out_of_range("question", 0, total as i64 - 1, item.question as i64)
        })?;

        if !answered.insert(item.question) {
            return Err(ValidationError::invalid_format(
                "answers",
                format!("question {} answered twice", item.question),
            ));
        }

        check_answer(&item.answer, question)?;
    }

    Ok(AnswerReceipt {
        module,
        answered: answered.len(),
        unanswered: total - answered.len(),
    })
}
