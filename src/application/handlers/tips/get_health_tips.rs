//! GetHealthTipsHandler - Query handler for the Quick Tips page.
//!
//! Looks up a category in the loaded catalog. Unknown categories are
//! rejected with `InvalidInput`; there is no fallback record.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::foundation::DomainError;
use crate::domain::tips::{TipCatalog, TipCategory, TipSet};

/// Query for one category's tips.
#[derive(Debug, Clone)]
pub struct GetHealthTipsQuery {
    pub category: TipCategory,
}

/// Tips together with the category they were looked up under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTips {
    pub category: TipCategory,
    #[serde(flatten)]
    pub tips: TipSet,
}

pub type GetHealthTipsResult = CategoryTips;

pub struct GetHealthTipsHandler {
    catalog: Arc<TipCatalog>,
}

impl GetHealthTipsHandler {
    pub fn new(catalog: Arc<TipCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: GetHealthTipsQuery) -> Result<GetHealthTipsResult, DomainError> {
        let tips = self.catalog.lookup(&query.category).map_err(|e| {
            warn!(category = %query.category, "Tip lookup failed: {}", e);
            DomainError::from(e)
        })?;

        debug!(category = %query.category, count = tips.tips.len(), "Served health tips");
        Ok(CategoryTips {
            category: query.category,
            tips: tips.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::tips::{get_health_tips, Gender, TipCatalogEntry};

    fn builtin() -> Arc<TipCatalog> {
        Arc::new(TipCatalog::builtin().clone())
    }

    #[test]
    fn test_gender_category_returns_gender_tips() {
        let handler = GetHealthTipsHandler::new(builtin());

        let result = handler
            .handle(GetHealthTipsQuery {
                category: Gender::Female.category(),
            })
            .unwrap();

        assert_eq!(result.category.as_str(), "female");
        assert_eq!(result.tips, get_health_tips(Gender::Female));
    }

    #[test]
    fn test_unknown_category_is_invalid_input() {
        let handler = GetHealthTipsHandler::new(builtin());

        let err = handler
            .handle(GetHealthTipsQuery {
                category: TipCategory::new("teens").unwrap(),
            })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_custom_catalog_is_used() {
        let catalog = TipCatalog::from_entries(vec![TipCatalogEntry {
            key: TipCategory::new("athletes").unwrap(),
            tips: TipSet {
                headline: "Tips for Athletes:".to_string(),
                tips: vec!["Hydrate before training.".to_string()],
                warning: "Rest after injuries.".to_string(),
            },
        }])
        .unwrap();
        let handler = GetHealthTipsHandler::new(Arc::new(catalog));

        assert!(handler
            .handle(GetHealthTipsQuery {
                category: TipCategory::new("athletes").unwrap()
            })
            .is_ok());
        assert!(handler
            .handle(GetHealthTipsQuery {
                category: Gender::Male.category()
            })
            .is_err());
    }

    #[test]
    fn test_result_serializes_flat() {
        let handler = GetHealthTipsHandler::new(builtin());
        let result = handler
            .handle(GetHealthTipsQuery {
                category: Gender::Male.category(),
            })
            .unwrap();

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["category"], "male");
        assert_eq!(json["headline"], "Tips for Men:");
    }
}
