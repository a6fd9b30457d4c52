//! Content factory for loading all data files from one directory.

use std::path::{Path, PathBuf};

use monster_core::{Catalog, GameRules};

use crate::loaders::{CatalogLoader, LoadResult, RulesLoader};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── species.ron
/// └── rules.toml
/// ```
///
/// A missing file falls back to the built-in content; a present but invalid
/// file is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const SPECIES_FILE: &'static str = "species.ron";
    pub const RULES_FILE: &'static str = "rules.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled_data_dir())
    }

    /// Load the species catalog from `species.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join(Self::SPECIES_FILE);
        if !path.exists() {
            return Ok(Catalog::standard());
        }
        CatalogLoader::load(&path)
    }

    /// Load game balance rules from `rules.toml`.
    pub fn load_rules(&self) -> LoadResult<GameRules> {
        let path = self.data_dir.join(Self::RULES_FILE);
        if !path.exists() {
            return Ok(GameRules::default());
        }
        RulesLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
