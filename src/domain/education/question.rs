//! Question records.

use serde::{Deserialize, Serialize};

use super::QuizModule;

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Exactly one option (radio group).
    SingleChoice,
    /// Any subset of options (checkboxes).
    MultiChoice,
    /// A value on an integer scale (slider).
    Scale,
}

/// Inclusive integer range of a scale question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

impl ScaleBounds {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// One label per step, e.g. `["1", "2", ... "10"]`.
    pub fn labels(&self) -> Vec<String> {
        (self.min..=self.max).map(|v| v.to_string()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    /// Widget label shown under the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    pub options: Vec<String>,
    pub kind: QuestionKind,
    /// Present only for [`QuestionKind::Scale`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleBounds>,
}

/// Question set of one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizModuleContent {
    pub module: QuizModule,
    pub title: String,
    pub questions: Vec<QuestionRecord>,
}
