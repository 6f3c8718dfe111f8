//! Application handlers.
//!
//! Command and query handlers that wrap the domain rules with input
//! validation and logging.

pub mod care;
pub mod dashboard;
pub mod education;
pub mod tips;

pub use care::{
    BookAppointmentCommand, BookAppointmentHandler, BookingOptions, GetBookingOptionsHandler,
    RecommendSpecialistsHandler, RecommendSpecialistsQuery,
};
pub use dashboard::GetDashboardOverviewHandler;
pub use education::{
    GetEducationOverviewHandler, GetQuizModuleHandler, GetQuizModuleQuery,
    SubmitQuizAnswersCommand, SubmitQuizAnswersHandler,
};
pub use tips::{GetHealthTipsHandler, GetHealthTipsQuery, ListTipCategoriesHandler};
