//! Action rejection errors.
//!
//! Every variant is a game-rule rejection. The Display text is the message
//! shown to the player, and a rejected action never mutates the monster.

use crate::action::ActionKind;
use crate::error::{ErrorSeverity, GameError};

// ============================================================================
// Action Errors
// ============================================================================

/// Reasons the engine refuses to resolve an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The daily allowance is used up.
    #[error("You have already performed {limit} actions today!")]
    QuotaExceeded { limit: u32 },

    /// Energy after regeneration is below the action's cost.
    #[error(
        "Not enough energy! {action} requires {required} energy, but you only have {available}."
    )]
    InsufficientEnergy {
        action: ActionKind,
        required: i32,
        available: i32,
    },

    /// Secondary training floor.
    #[error("{name} is too tired to train! Energy must be at least {floor}.")]
    TooTired { name: String, floor: i32 },

    /// Requested kind is not one of feed/train/rest/rename.
    #[error("Unknown action type: {0}")]
    UnknownActionKind(String),

    /// The monster's species is missing from the catalog.
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error(transparent)]
    InvalidName(#[from] NameError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            QuotaExceeded { .. } | InsufficientEnergy { .. } | TooTired { .. } => {
                ErrorSeverity::Recoverable
            }
            UnknownActionKind(_) => ErrorSeverity::Validation,
            UnknownSpecies(_) => ErrorSeverity::Internal,
            InvalidName(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            QuotaExceeded { .. } => "ACTION_QUOTA_EXCEEDED",
            InsufficientEnergy { .. } => "ACTION_INSUFFICIENT_ENERGY",
            TooTired { .. } => "ACTION_TOO_TIRED",
            UnknownActionKind(_) => "ACTION_UNKNOWN_KIND",
            UnknownSpecies(_) => "ACTION_UNKNOWN_SPECIES",
            InvalidName(err) => err.error_code(),
        }
    }
}

// ============================================================================
// Rename Errors
// ============================================================================

/// Reasons a requested monster name is refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameError {
    #[error("Monster name cannot be empty")]
    Empty,

    #[error("Monster name must be {max} characters or less")]
    TooLong { max: usize },

    #[error("New name is the same as current name")]
    Unchanged,
}

impl GameError for NameError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "ACTION_NAME_EMPTY",
            Self::TooLong { .. } => "ACTION_NAME_TOO_LONG",
            Self::Unchanged => "ACTION_NAME_UNCHANGED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_player_facing() {
        assert_eq!(
            ActionError::QuotaExceeded { limit: 3 }.to_string(),
            "You have already performed 3 actions today!"
        );
        assert_eq!(
            ActionError::InsufficientEnergy {
                action: ActionKind::Train,
                required: 30,
                available: 25,
            }
            .to_string(),
            "Not enough energy! train requires 30 energy, but you only have 25."
        );
        assert_eq!(
            ActionError::TooTired {
                name: "Fire Drake".into(),
                floor: 20,
            }
            .to_string(),
            "Fire Drake is too tired to train! Energy must be at least 20."
        );
        assert_eq!(
            ActionError::from(NameError::TooLong { max: 20 }).to_string(),
            "Monster name must be 20 characters or less"
        );
    }

    #[test]
    fn rule_rejections_are_recoverable() {
        assert!(ActionError::QuotaExceeded { limit: 3 }.severity().is_recoverable());
        assert!(
            ActionError::UnknownSpecies("Wyvern".into())
                .severity()
                .is_internal()
        );
        assert_eq!(
            ActionError::from(NameError::Unchanged).error_code(),
            "ACTION_NAME_UNCHANGED"
        );
    }
}
