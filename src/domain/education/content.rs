//! Quiz-module rule: fixed question tables per module.

use super::{QuestionKind, QuestionRecord, QuizModule, QuizModuleContent, ScaleBounds};

const WELLNESS_SCALE: ScaleBounds = ScaleBounds {
    min: 1,
    max: 10,
    default: 5,
};

fn choice(
    kind: QuestionKind,
    prompt: &str,
    instruction: Option<&str>,
    options: &[&str],
) -> QuestionRecord {
    QuestionRecord {
        prompt: prompt.to_string(),
        instruction: instruction.map(str::to_string),
        options: options.iter().map(|o| o.to_string()).collect(),
        kind,
        scale: None,
    }
}

fn scale(prompt: &str, instruction: &str, bounds: ScaleBounds) -> QuestionRecord {
    QuestionRecord {
        prompt: prompt.to_string(),
        instruction: Some(instruction.to_string()),
        options: bounds.labels(),
        kind: QuestionKind::Scale,
        scale: Some(bounds),
    }
}

fn nutrition_basics() -> Vec<QuestionRecord> {
    vec![
        choice(
            QuestionKind::SingleChoice,
            "What is a balanced diet?",
            Some("Pick the correct definition:"),
            &[
                "Only fruits and water",
                "A mix of proteins, carbs, fats, vitamins, and minerals",
                "Fasting every other day",
            ],
        ),
        choice(
            QuestionKind::MultiChoice,
            "What are healthy fats?",
            None,
            &["Avocados", "Fried chicken", "Olive oil"],
        ),
    ]
}

fn mental_health() -> Vec<QuestionRecord> {
    vec![
        scale(
            "How often should you check in on your mental health?",
            "Rate your mental wellness today (1 = low, 10 = excellent)",
            WELLNESS_SCALE,
        ),
        choice(
            QuestionKind::MultiChoice,
            "Choose stress-relieving activities:",
            None,
            &["Meditation", "Screaming", "Deep breathing", "Punching walls"],
        ),
    ]
}

fn exercise_essentials() -> Vec<QuestionRecord> {
    vec![
        choice(
            QuestionKind::SingleChoice,
            "How many minutes of moderate exercise is recommended weekly?",
            Some("Choose one:"),
            &["60 minutes", "150 minutes", "300 minutes"],
        ),
        choice(
            QuestionKind::MultiChoice,
            "Which of these are cardio exercises?",
            None,
            &["Jogging", "Weight lifting", "Swimming", "Bench press"],
        ),
    ]
}

/// Returns the question set for a module.
pub fn get_quiz_module(module: QuizModule) -> QuizModuleContent {
    let questions = match module {
        QuizModule::NutritionBasics => nutrition_basics(),
        QuizModule::MentalHealth => mental_health(),
        QuizModule::ExerciseEssentials => exercise_essentials(),
    };

    QuizModuleContent {
        module,
        title: module.display_name().to_string(),
        questions,
    }
}
