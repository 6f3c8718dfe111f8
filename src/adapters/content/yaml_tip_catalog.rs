//! YAML Tip Catalog Adapter
//!
//! Reads the tip table from a YAML file:
//!
//! ```yaml
//! categories:
//!   - key: male
//!     headline: "Tips for Men:"
//!     tips:
//!       - Regular prostate checks.
//!     warning: Avoid self-medication. Always consult a qualified practitioner.
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::tips::{TipCatalog, TipCatalogDocument};
use crate::ports::{TipCatalogError, TipCatalogSource};

/// File-backed tip catalog
#[derive(Debug, Clone)]
pub struct YamlTipCatalogSource {
    path: PathBuf,
}

impl YamlTipCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse catalog text without touching the filesystem
    pub fn parse(yaml: &str) -> Result<TipCatalog, TipCatalogError> {
        let document: TipCatalogDocument =
            serde_yaml::from_str(yaml).map_err(|e| TipCatalogError::Parse(e.to_string()))?;
        Ok(TipCatalog::from_document(document)?)
    }

    /// Render a catalog in the format `parse` reads
    pub fn render(catalog: &TipCatalog) -> Result<String, TipCatalogError> {
        serde_yaml::to_string(&catalog.to_document())
            .map_err(|e| TipCatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl TipCatalogSource for YamlTipCatalogSource {
    async fn load(&self) -> Result<TipCatalog, TipCatalogError> {
        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| TipCatalogError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let catalog = Self::parse(&yaml)?;
        tracing::debug!(
            path = %self.path.display(),
            categories = catalog.len(),
            "Loaded tip catalog"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("yaml file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tips::{Gender, TipCategory};
    use tempfile::TempDir;

    const SENIORS_YAML: &str = r#"
categories:
  - key: seniors
    headline: "Tips for Seniors:"
    tips:
      - Stay active every day.
      - Check your vision yearly.
    warning: Review your medication with a doctor.
  - key: male
    headline: "Tips for Men:"
    tips:
      - Regular prostate checks.
    warning: Avoid self-medication.
"#;

    #[tokio::test]
    async fn test_load_catalog_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tips.yaml");
        std::fs::write(&path, SENIORS_YAML).unwrap();

        let catalog = YamlTipCatalogSource::new(&path).load().await.unwrap();

        assert_eq!(catalog.len(), 2);
        let seniors = catalog.lookup(&TipCategory::new("seniors").unwrap()).unwrap();
        assert_eq!(seniors.tips.len(), 2);
        assert_eq!(seniors.warning, "Review your medication with a doctor.");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = YamlTipCatalogSource::new(temp_dir.path().join("absent.yaml"));

        let result = source.load().await;
        assert!(matches!(result, Err(TipCatalogError::Io { .. })));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let result = YamlTipCatalogSource::parse("categories: [ {key: ");
        assert!(matches!(result, Err(TipCatalogError::Parse(_))));
    }

    #[test]
    fn test_bad_category_key_is_parse_error() {
        let yaml = r#"
categories:
  - key: "Older Adults"
    headline: h
    tips: [t]
    warning: w
"#;
        assert!(matches!(
            YamlTipCatalogSource::parse(yaml),
            Err(TipCatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_tip_list_is_invalid() {
        let yaml = r#"
categories:
  - key: seniors
    headline: h
    tips: []
    warning: w
"#;
        assert!(matches!(
            YamlTipCatalogSource::parse(yaml),
            Err(TipCatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_rendered_builtin_catalog_parses_back() {
        let yaml = YamlTipCatalogSource::render(TipCatalog::builtin()).unwrap();
        let parsed = YamlTipCatalogSource::parse(&yaml).unwrap();

        assert_eq!(&parsed, TipCatalog::builtin());
        assert!(parsed.lookup(&Gender::Female.category()).is_ok());
    }
}
