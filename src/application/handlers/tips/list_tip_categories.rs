//! ListTipCategoriesHandler - Query handler for the category selector.

use std::sync::Arc;

use crate::domain::tips::{TipCatalog, TipCategory};

pub struct ListTipCategoriesHandler {
    catalog: Arc<TipCatalog>,
}

impl ListTipCategoriesHandler {
    pub fn new(catalog: Arc<TipCatalog>) -> Self {
        Self { catalog }
    }

    /// Registered categories, in catalog order.
    pub fn handle(&self) -> Vec<TipCategory> {
        self.catalog.categories()
    }
}
