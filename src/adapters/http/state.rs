//! Shared application state for the HTTP adapters.

use std::sync::Arc;

use crate::application::handlers::{
    BookAppointmentHandler, GetBookingOptionsHandler, GetDashboardOverviewHandler,
    GetEducationOverviewHandler, GetHealthTipsHandler, GetQuizModuleHandler,
    ListTipCategoriesHandler, RecommendSpecialistsHandler, SubmitQuizAnswersHandler,
};
use crate::domain::tips::TipCatalog;

/// State shared by every route. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub tip_catalog: Arc<TipCatalog>,
}

impl AppState {
    pub fn new(tip_catalog: TipCatalog) -> Self {
        Self {
            tip_catalog: Arc::new(tip_catalog),
        }
    }

    pub fn dashboard_overview_handler(&self) -> GetDashboardOverviewHandler {
        GetDashboardOverviewHandler::new()
    }

    pub fn recommend_specialists_handler(&self) -> RecommendSpecialistsHandler {
        RecommendSpecialistsHandler::new()
    }

    pub fn booking_options_handler(&self) -> GetBookingOptionsHandler {
        GetBookingOptionsHandler::new()
    }

    pub fn book_appointment_handler(&self) -> BookAppointmentHandler {
        BookAppointmentHandler::new()
    }

    pub fn health_tips_handler(&self) -> GetHealthTipsHandler {
        GetHealthTipsHandler::new(self.tip_catalog.clone())
    }

    pub fn tip_categories_handler(&self) -> ListTipCategoriesHandler {
        ListTipCategoriesHandler::new(self.tip_catalog.clone())
    }

    pub fn education_overview_handler(&self) -> GetEducationOverviewHandler {
        GetEducationOverviewHandler::new()
    }

    pub fn quiz_module_handler(&self) -> GetQuizModuleHandler {
        GetQuizModuleHandler::new()
    }

    pub fn submit_quiz_answers_handler(&self) -> SubmitQuizAnswersHandler {
        SubmitQuizAnswersHandler::new()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TipCatalog::default())
    }
}
