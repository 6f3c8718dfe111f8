//! Extensible tip catalog keyed by [`TipCategory`].
//!
//! The catalog replaces a hard two-way gender branch: categories are data, so a
//! new demographic only needs a new table entry. Lookups of unregistered keys
//! fail instead of falling back to some default record.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{get_health_tips, Gender, TipCategory, TipSet};
use crate::domain::foundation::ValidationError;

/// One row of the catalog table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipCatalogEntry {
    pub key: TipCategory,
    #[serde(flatten)]
    pub tips: TipSet,
}

/// Serialized form of a catalog, as stored in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TipCatalogDocument {
    pub categories: Vec<TipCatalogEntry>,
}

/// Validated, immutable mapping from category to tips.
///
/// Entries keep the order they were defined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipCatalog {
    entries: Vec<TipCatalogEntry>,
}

static BUILTIN: Lazy<TipCatalog> = Lazy::new(|| TipCatalog {
    entries: Gender::ALL
        .into_iter()
        .map(|gender| TipCatalogEntry {
            key: gender.category(),
            tips: get_health_tips(gender),
        })
        .collect(),
});

impl TipCatalog {
    /// Catalog holding the male and female tables.
    pub fn builtin() -> &'static TipCatalog {
        &BUILTIN
    }

    /// Builds a catalog, rejecting empty tables, duplicate keys and
    /// incomplete records.
    pub fn from_entries(entries: Vec<TipCatalogEntry>) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::empty_field("categories"));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key.clone()) {
                return Err(ValidationError::invalid_format(
                    "categories",
                    format!("duplicate category '{}'", entry.key),
                ));
            }
            entry.tips.validate()?;
        }

        Ok(Self { entries })
    }

    /// Builds a catalog from its serialized form.
    pub fn from_document(document: TipCatalogDocument) -> Result<Self, ValidationError> {
        Self::from_entries(document.categories)
    }

    /// Serialized form of this catalog.
    pub fn to_document(&self) -> TipCatalogDocument {
        TipCatalogDocument {
            categories: self.entries.clone(),
        }
    }

    /// Looks up the tips for a category.
    pub fn lookup(&self, category: &TipCategory) -> Result<&TipSet, ValidationError> {
        self.entries
            .iter()
            .find(|entry| &entry.key == category)
            .map(|entry| &entry.tips)
            .ok_or_else(|| ValidationError::invalid_input("category", category.as_str()))
    }

    /// Registered category keys, in definition order.
    pub fn categories(&self) -> Vec<TipCategory> {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TipCatalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
