//! Content Adapters
//!
//! Implementations of the TipCatalogSource port.
//!
//! ## Available Adapters
//!
//! - **YamlTipCatalogSource** - Reads the tip table from a YAML file
//! - **BuiltinTipCatalogSource** - Serves the compiled-in tables
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::content::source_for;
//!
//! let source = source_for(config.content.tips_path.as_deref());
//! let catalog = source.load().await?;
//! ```

mod builtin_tip_catalog;
mod yaml_tip_catalog;

pub use builtin_tip_catalog::BuiltinTipCatalogSource;
pub use yaml_tip_catalog::YamlTipCatalogSource;

use std::path::Path;
use std::sync::Arc;

use crate::ports::TipCatalogSource;

/// Picks the YAML source when a path is configured, the built-in one otherwise.
pub fn source_for(tips_path: Option<&Path>) -> Arc<dyn TipCatalogSource> {
    match tips_path {
        Some(path) => Arc::new(YamlTipCatalogSource::new(path)),
        None => Arc::new(BuiltinTipCatalogSource::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_selection() {
        assert_eq!(source_for(None).describe(), "built-in tables");
        assert!(source_for(Some(Path::new("/etc/tips.yaml")))
            .describe()
            .contains("/etc/tips.yaml"));
    }
}
