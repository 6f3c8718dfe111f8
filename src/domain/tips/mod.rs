//! Tips module - Quick Tips content.
//!
//! - `category` - the closed [`Gender`] selector and the open [`TipCategory`] key
//! - `tip_set` - tip records and the gender rule
//! - `catalog` - extensible category → tips table

mod catalog;
mod category;
mod tip_set;

pub use catalog::{TipCatalog, TipCatalogDocument, TipCatalogEntry};
pub use category::{Gender, TipCategory};
pub use tip_set::{get_health_tips, TipSet};
