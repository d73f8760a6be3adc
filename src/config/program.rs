//! Training program configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::program::{CatalogError, ProgramCatalog};

/// Training program configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramConfig {
    /// YAML file replacing the built-in program
    pub catalog_path: Option<PathBuf>,
}

impl ProgramConfig {
    /// Load the configured catalog, or the built-in one when no file is set
    pub fn load_catalog(&self) -> Result<ProgramCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => ProgramCatalog::from_path(path),
            None => ProgramCatalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_builtin_catalog() {
        let catalog = ProgramConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.total_weeks(), 12);
    }

    #[test]
    fn test_missing_catalog_file_fails() {
        let config = ProgramConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/program.yaml")),
        };
        assert!(matches!(config.load_catalog(), Err(CatalogError::Io { .. })));
    }
}
