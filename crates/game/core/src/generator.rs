//! Deterministic identity → monster mapping.
//!
//! The SHA-256 digest of the identity string is sliced into 16-bit words:
//!
//! ```text
//! digest[0..2]  -> species index (mod roster length)
//! digest[2..4]  -> element index (mod 8)
//! digest[4..6]  -> size bucket (thirds of 0..=0xFFFF)
//! digest[0..16] -> monster id
//! ```
//!
//! Each word is the same value as four hex characters of the digest's
//! lowercase hex string, read in order.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Builder;

use crate::catalog::{Catalog, Element};
use crate::config::GameRules;
use crate::state::{Monster, MonsterId, SizeCategory, StatBlock};

/// Generates monsters from identity strings against a species catalog.
#[derive(Clone, Copy, Debug)]
pub struct MonsterGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> MonsterGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Maps `identity` to a fully specified monster.
    ///
    /// Total over all strings, including the empty one. Every field except
    /// `created_at` is a pure function of `identity` and the catalog.
    pub fn generate(&self, identity: &str, created_at: DateTime<Utc>) -> Monster {
        let digest: [u8; 32] = Sha256::digest(identity.as_bytes()).into();

        let species_word = word(&digest, 0);
        let element_word = word(&digest, 2);
        let size_word = word(&digest, 4);

        let species = self.catalog.by_index(usize::from(species_word));
        let element = Element::from_index(usize::from(element_word));
        let size = SizeCategory::from_bucket(size_word);

        let mut stats = StatBlock::from_base(
            species.base,
            GameRules::STARTING_MOOD,
            GameRules::STARTING_ENERGY,
        );

        match size {
            SizeCategory::Small => {
                stats.agility += 2;
                stats.fortitude -= 1;
            }
            SizeCategory::Large => {
                stats.fortitude += 2;
                stats.agility -= 1;
            }
            SizeCategory::Medium => {}
        }

        if let Some(bonus) = element.stat_bonus() {
            let value = stats.get_mut(bonus.stat);
            *value = bonus.apply(*value);
        }
        stats.clamp_all();

        Monster {
            id: id_from_digest(&digest),
            owner: None,
            name: format!("{} {}", element, species.name),
            species: species.name.clone(),
            element,
            size,
            base_size: sized_base(species.base_size, size),
            stats,
            stage: GameRules::STARTING_STAGE,
            created_at,
            last_action_at: None,
            actions_today: 0,
        }
    }
}

/// Nudges the species' nominal size by the size category: Small `-0.5`,
/// Large `+1.5`, rounded half up, never below 1.
fn sized_base(base_size: u32, size: SizeCategory) -> u32 {
    let nominal = f64::from(base_size);
    let nudged = match size {
        SizeCategory::Small => (nominal - 0.5).round().max(1.0),
        SizeCategory::Medium => nominal,
        SizeCategory::Large => (nominal + 1.5).round(),
    };
    nudged as u32
}

fn word(digest: &[u8; 32], offset: usize) -> u16 {
    u16::from_be_bytes([digest[offset], digest[offset + 1]])
}

fn id_from_digest(digest: &[u8; 32]) -> MonsterId {
    let mut id_bytes = [0u8; 16];
    id_bytes.copy_from_slice(&digest[..16]);
    MonsterId(Builder::from_custom_bytes(id_bytes).into_uuid())
}

/// Deterministic id for an identity without generating the full monster.
pub fn monster_id_for(identity: &str) -> MonsterId {
    let digest: [u8; 32] = Sha256::digest(identity.as_bytes()).into();
    id_from_digest(&digest)
}
