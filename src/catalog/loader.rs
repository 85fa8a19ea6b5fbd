use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::Catalog;

/// Errors that can occur when loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{origin}': {source}")]
    ParseError {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

/// Default data set compiled into the binary, used when no `--data` file
/// or configured path is given.
const DEFAULT_CATALOG: &str = include_str!("../../data/tutorials.json");

impl Catalog {
    /// Loads the embedded default catalog.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::parse("embedded tutorials.json", DEFAULT_CATALOG)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&path.display().to_string(), &content)
    }

    fn parse(origin: &str, content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
                origin: origin.to_string(),
                source: e,
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validates the catalog.
    ///
    /// Checks:
    /// - At least one collection with at least one tutorial
    /// - Tutorial titles are unique within each collection
    fn validate(&self) -> Result<(), CatalogError> {
        if self.tutorial_count() == 0 {
            return Err(CatalogError::ValidationError {
                message: "Catalog contains no tutorials".to_string(),
            });
        }

        for collection in self.collections() {
            let mut titles = HashSet::new();
            for tutorial in &collection.tutorials {
                if !titles.insert(tutorial.title.as_str()) {
                    return Err(CatalogError::ValidationError {
                        message: format!(
                            "Duplicate tutorial title '{}' in collection '{}'",
                            tutorial.title, collection.title
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
