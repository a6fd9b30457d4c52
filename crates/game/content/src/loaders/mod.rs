//! Content loaders for reading game data from files.
//!
//! Each loader parses one file format into monster-core types and validates
//! it before handing it out.

pub mod catalog;
pub mod factory;
pub mod rules;

pub use catalog::{CatalogLoader, SpeciesCatalog};
pub use factory::ContentFactory;
pub use rules::RulesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
