//! Education page overview: videos, module list and progress tracker.

use serde::{Deserialize, Serialize};

use super::{get_quiz_module, QuizModule};

const LEARNING_VIDEOS: [&str; 2] = [
    "https://www.youtube.com/watch?v=dBnniua6-oM",
    "https://www.youtube.com/watch?v=30gEiweaAVQ",
];

/// Share of the education journey shown in the demo tracker.
const DEMO_PROGRESS_PERCENT: u8 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningVideo {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub module: QuizModule,
    pub title: String,
    pub question_count: usize,
}

/// Completion of the education journey, 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTracker {
    completed_percent: u8,
}

impl ProgressTracker {
    /// Values above 100 are capped at 100.
    pub fn new(completed_percent: u8) -> Self {
        Self {
            completed_percent: completed_percent.min(100),
        }
    }

    pub fn completed_percent(&self) -> u8 {
        self.completed_percent
    }

    /// Progress bar fill, 0.0 to 1.0.
    pub fn fraction(&self) -> f64 {
        f64::from(self.completed_percent) / 100.0
    }

    pub fn message(&self) -> String {
        format!(
            "You've completed {}% of the education journey!",
            self.completed_percent
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressView {
    pub completed_percent: u8,
    pub fraction: f64,
    pub message: String,
}

impl From<ProgressTracker> for ProgressView {
    fn from(tracker: ProgressTracker) -> Self {
        Self {
            completed_percent: tracker.completed_percent(),
            fraction: tracker.fraction(),
            message: tracker.message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationOverview {
    pub videos: Vec<LearningVideo>,
    pub modules: Vec<ModuleSummary>,
    pub progress: ProgressView,
}

/// Builds the education page overview.
pub fn education_overview() -> EducationOverview {
    let modules = QuizModule::ALL
        .into_iter()
        .map(|module| ModuleSummary {
            module,
            title: module.display_name().to_string(),
            question_count: get_quiz_module(module).questions.len(),
        })
        .collect();

    EducationOverview {
        videos: LEARNING_VIDEOS
            .iter()
            .map(|url| LearningVideo {
                url: url.to_string(),
            })
            .collect(),
        modules,
        progress: ProgressTracker::new(DEMO_PROGRESS_PERCENT).into(),
    }
}
