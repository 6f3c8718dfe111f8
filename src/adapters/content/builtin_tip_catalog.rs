//! Built-in Tip Catalog Adapter
//!
//! Serves the compiled-in male/female tables. Used when no catalog file is
//! configured, and in tests.

use async_trait::async_trait;

use crate::domain::tips::TipCatalog;
use crate::ports::{TipCatalogError, TipCatalogSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTipCatalogSource;

impl BuiltinTipCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TipCatalogSource for BuiltinTipCatalogSource {
    async fn load(&self) -> Result<TipCatalog, TipCatalogError> {
        Ok(TipCatalog::builtin().clone())
    }

    fn describe(&self) -> String {
        "built-in tables".to_string()
    }
}
