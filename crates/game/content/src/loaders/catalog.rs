//! Species catalog loader.

use std::path::Path;

use anyhow::Context;
use monster_core::{Catalog, Species};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Species roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    pub species: Vec<Species>,
}

/// Loader for the species catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a species catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let roster: SpeciesCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species catalog RON: {}", e))?;

        Ok(Catalog::new(roster.species)?)
    }
}
