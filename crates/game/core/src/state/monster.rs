use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::stats::StatBlock;
use crate::catalog::Element;

/// Identifier of a generated monster.
///
/// Derived from the identity digest, so the same identity always maps to the
/// same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId(pub Uuid);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to the owning user account. Opaque to the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coarse body-size bucket fixed at generation time.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SizeCategory {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeCategory {
    /// Buckets a 16-bit digest slice into thirds.
    pub const fn from_bucket(value: u16) -> Self {
        if value <= 0x5555 {
            SizeCategory::Small
        } else if value <= 0xAAAA {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }
}

/// A user's creature.
///
/// `species`, `element` and `size` never change after generation. Stats and
/// the daily counters are only rewritten by [`crate::GameEngine`], which
/// returns a new snapshot rather than mutating the caller's copy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: MonsterId,
    /// `None` until the generated monster is bound to an account.
    pub owner: Option<UserId>,
    pub name: String,
    /// Species name, resolved against the catalog.
    pub species: String,
    pub element: Element,
    pub size: SizeCategory,
    pub base_size: u32,
    pub stats: StatBlock,
    pub stage: u32,
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last quota-consuming action.
    pub last_action_at: Option<DateTime<Utc>>,
    pub actions_today: u32,
}

impl Monster {
    /// Binds the monster to its owning account (builder pattern).
    #[must_use]
    pub fn owned_by(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// UTC calendar day of the last quota-consuming action.
    pub fn last_action_date(&self) -> Option<NaiveDate> {
        self.last_action_at.map(|at| at.date_naive())
    }
}
