//! HTTP handlers for tips endpoints.

use axum::extract::{Json, Path, State};
use serde::Serialize;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::tips::CategoryTips;
use crate::application::handlers::GetHealthTipsQuery;
use crate::domain::tips::TipCategory;

/// Response for the category selector.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<TipCategory>,
}

/// GET /api/tips
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: state.tip_categories_handler().handle(),
    })
}

/// GET /api/tips/:category
///
/// The category is normalized (trimmed, lowercased) before lookup, so
/// `/api/tips/Male` and `/api/tips/male` are the same request.
pub async fn get_tips(
    State(state): State<AppState>,
    Path(raw_category): Path<String>,
) -> Result<Json<CategoryTips>, ApiError> {
    let category = TipCategory::new(&raw_category)?;
    let tips = state
        .health_tips_handler()
        .handle(GetHealthTipsQuery { category })?;
    Ok(Json(tips))
}
