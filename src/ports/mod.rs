//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Content Ports
//!
//! - `TipCatalogSource` - Loads the category → tips table

mod tip_catalog_source;

pub use tip_catalog_source::{TipCatalogError, TipCatalogSource};
