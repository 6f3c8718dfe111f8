//! HTTP handlers for education endpoints.

use axum::extract::{Json, Path, State};

use crate::adapters::http::{ApiError, ApiJson, AppState};
use crate::application::handlers::{GetQuizModuleQuery, SubmitQuizAnswersCommand};
use crate::domain::education::{
    AnswerReceipt, EducationOverview, QuizModule, QuizModuleContent, QuizSubmission,
};

/// GET /api/education
pub async fn get_overview(State(state): State<AppState>) -> Json<EducationOverview> {
    Json(state.education_overview_handler().handle())
}

/// GET /api/education/modules/:module
///
/// Accepts the module key (`mental-health`) or its display name.
pub async fn get_module(
    State(state): State<AppState>,
    Path(raw_module): Path<String>,
) -> Result<Json<QuizModuleContent>, ApiError> {
    let module: QuizModule = raw_module.parse()?;
    Ok(Json(
        state
            .quiz_module_handler()
            .handle(GetQuizModuleQuery { module }),
    ))
}

/// POST /api/education/modules/:module/answers
pub async fn submit_answers(
    State(state): State<AppState>,
    Path(raw_module): Path<String>,
    ApiJson(submission): ApiJson<QuizSubmission>,
) -> Result<Json<AnswerReceipt>, ApiError> {
    let module: QuizModule = raw_module.parse()?;
    let receipt = state
        .submit_quiz_answers_handler()
        .handle(SubmitQuizAnswersCommand { module, submission })?;
    Ok(Json(receipt))
}
