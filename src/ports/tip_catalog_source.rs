//! Tip Catalog Source Port - Interface for loading the tip table.
//!
//! The tip catalog is data, not code. This port lets the host decide where
//! that data comes from: the built-in tables or a configuration file.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::tips::TipCatalog;

/// Errors that can occur while loading a tip catalog
#[derive(Debug, thiserror::Error)]
pub enum TipCatalogError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse tip catalog: {0}")]
    Parse(String),

    #[error("Invalid tip catalog: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<TipCatalogError> for DomainError {
    fn from(err: TipCatalogError) -> Self {
        DomainError::new(ErrorCode::ContentUnavailable, err.to_string())
    }
}

/// Port for loading the tip catalog
#[async_trait]
pub trait TipCatalogSource: Send + Sync {
    /// Load and validate the catalog
    ///
    /// # Errors
    /// Returns `TipCatalogError` if the source cannot be read or holds an
    /// invalid table
    async fn load(&self) -> Result<TipCatalog, TipCatalogError>;

    /// Human-readable description of where the catalog comes from
    fn describe(&self) -> String;
}
