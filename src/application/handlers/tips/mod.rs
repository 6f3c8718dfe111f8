//! Tips handlers.
//!
//! ## Queries
//! - Tips for a category
//! - Registered categories

mod get_health_tips;
mod list_tip_categories;

pub use get_health_tips::{
    CategoryTips, GetHealthTipsHandler, GetHealthTipsQuery, GetHealthTipsResult,
};
pub use list_tip_categories::ListTipCategoriesHandler;
