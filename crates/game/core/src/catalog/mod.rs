//! Immutable reference data: species roster and element behavior.
//!
//! The [`Catalog`] is loaded once (built in, or from data files through
//! `monster-content`) and shared read-only by the generator and the resolver.

mod element;
mod species;

pub use element::{Element, ElementProfile, StatBonus};
pub use species::Species;

/// Errors raised while assembling a catalog from external data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("species catalog must contain at least one species")]
    Empty,

    #[error("species '{0}' is defined more than once")]
    DuplicateSpecies(String),
}

/// Ordered species roster.
///
/// Order matters: generation maps a digest slice onto an index in this list,
/// so reordering the roster changes which species every identity receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    species: Vec<Species>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty rosters and duplicate names.
    pub fn new(species: Vec<Species>) -> Result<Self, CatalogError> {
        if species.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, entry) in species.iter().enumerate() {
            if species[..index].iter().any(|s| s.name == entry.name) {
                return Err(CatalogError::DuplicateSpecies(entry.name.clone()));
            }
        }
        Ok(Self { species })
    }

    /// The eight built-in species.
    pub fn standard() -> Self {
        Self {
            species: species::standard_roster(),
        }
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Species at `index`, wrapping modulo the roster length.
    pub fn by_index(&self, index: usize) -> &Species {
        &self.species[index % self.species.len()]
    }

    pub fn get(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name == name)
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
