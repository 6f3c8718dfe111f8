//! Content configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where rule tables that can be extended without code changes live
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// YAML tip catalog. The built-in male/female tables are used when unset.
    pub tips_path: Option<PathBuf>,
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.tips_path {
            let is_yaml = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
                .unwrap_or(false);
            if !is_yaml {
                return Err(ValidationError::InvalidTipsPath(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}
