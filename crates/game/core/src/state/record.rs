use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::monster::MonsterId;
use super::stats::StatKind;
use crate::action::ActionKind;

/// Identifier of an action log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub Uuid);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single combat-stat increase produced by successful training.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatGain {
    pub stat: StatKind,
    pub amount: i32,
}

/// Payload of an [`ActionRecord`]: the deltas an action asked for plus the
/// message shown to the player.
///
/// Deltas are the requested changes; the committed stats are clamped, so a
/// `+20` energy change on a full meter still leaves energy at 100.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResult {
    pub stat_gain: Option<StatGain>,
    pub mood_change: Option<i32>,
    pub energy_change: Option<i32>,
    pub message: String,
}

impl ActionResult {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Append-only log entry for one resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    pub id: ActionId,
    pub monster_id: MonsterId,
    pub kind: ActionKind,
    pub result: ActionResult,
    pub timestamp: DateTime<Utc>,
}
