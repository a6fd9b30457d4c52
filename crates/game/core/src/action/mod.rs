//! Action domain.
//!
//! - `ActionKind`: the four loggable action types
//! - `ActionCommand`: a request to the engine, carrying rename input
//! - `ActionEnv`: read-only rules and catalog plus the injected randomness
//! - `ActionTransition`: per-action validation and application hooks
//!
//! Feed, train and rest consume the daily quota and see passive
//! regeneration first. Rename only changes the display name.

mod error;
mod feed;
mod rename;
mod rest;
mod train;
mod transition;

pub use error::{ActionError, NameError};
pub use feed::FeedAction;
pub use rename::{RenameAction, normalize_name};
pub use rest::RestAction;
pub use train::{TrainAction, mood_modifier, success_chance};
pub use transition::ActionTransition;

use crate::catalog::Catalog;
use crate::config::GameRules;
use crate::env::RandomSource;

/// Loggable action types.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Feed,
    Train,
    Rest,
    Rename,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Feed,
        ActionKind::Train,
        ActionKind::Rest,
        ActionKind::Rename,
    ];

    /// Parses a kind case-insensitively, rejecting anything outside the four
    /// known kinds.
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        input
            .trim()
            .parse()
            .map_err(|_| ActionError::UnknownActionKind(input.to_string()))
    }

    /// Whether the action counts against the daily quota.
    pub const fn consumes_quota(self) -> bool {
        !matches!(self, ActionKind::Rename)
    }
}

/// A request handed to [`crate::GameEngine::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionCommand {
    Feed,
    Train,
    Rest,
    Rename { name: String },
}

impl ActionCommand {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionCommand::Feed => ActionKind::Feed,
            ActionCommand::Train => ActionKind::Train,
            ActionCommand::Rest => ActionKind::Rest,
            ActionCommand::Rename { .. } => ActionKind::Rename,
        }
    }

    /// Builds a command from a textual kind and an optional argument.
    ///
    /// Only rename takes an argument; a missing name is reported as an empty
    /// one.
    pub fn parse(kind: &str, argument: Option<&str>) -> Result<Self, ActionError> {
        Ok(match ActionKind::parse(kind)? {
            ActionKind::Feed => ActionCommand::Feed,
            ActionKind::Train => ActionCommand::Train,
            ActionKind::Rest => ActionCommand::Rest,
            ActionKind::Rename => ActionCommand::Rename {
                name: argument.ok_or(NameError::Empty)?.to_string(),
            },
        })
    }
}

/// Everything an action may consult while resolving.
pub struct ActionEnv<'a> {
    pub rules: &'a GameRules,
    pub catalog: &'a Catalog,
    pub rng: &'a mut dyn RandomSource,
}

impl<'a> ActionEnv<'a> {
    pub fn new(rules: &'a GameRules, catalog: &'a Catalog, rng: &'a mut dyn RandomSource) -> Self {
        Self {
            rules,
            catalog,
            rng,
        }
    }
}

/// Formats a delta with an explicit sign: `+5`, `-3`, `+0`.
pub(crate) fn signed(value: i32) -> String {
    format!("{value:+}")
}
