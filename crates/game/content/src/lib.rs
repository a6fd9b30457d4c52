//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML data files that parameterize
//! the rules engine:
//! - Species roster (data-driven via RON)
//! - Game balance rules (data-driven via TOML)
//!
//! Content is consumed by the runtime at startup and never appears in
//! monster snapshots. Without the `loaders` feature the crate only exposes
//! the bundled data directory.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ContentFactory, LoadResult, RulesLoader, SpeciesCatalog};

/// Directory holding the data files shipped with this crate.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
