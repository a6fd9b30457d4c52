use super::{ActionEnv, ActionError, ActionKind, ActionTransition, NameError};
use crate::state::{ActionResult, Monster};

/// Changes the monster's display name. Stat-inert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameAction {
    pub name: String,
}

impl RenameAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Trims `requested` and checks it against the current name and the length
/// limit (in characters).
pub fn normalize_name(current: &str, requested: &str, max_len: usize) -> Result<String, NameError> {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.chars().count() > max_len {
        return Err(NameError::TooLong { max: max_len });
    }
    if trimmed == current {
        return Err(NameError::Unchanged);
    }
    Ok(trimmed.to_string())
}

impl ActionTransition for RenameAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Rename
    }

    fn pre_validate(&self, monster: &Monster, env: &ActionEnv<'_>) -> Result<(), Self::Error> {
        normalize_name(&monster.name, &self.name, env.rules.max_name_length)?;
        Ok(())
    }

    fn apply(
        &self,
        monster: &mut Monster,
        env: &mut ActionEnv<'_>,
    ) -> Result<ActionResult, Self::Error> {
        let name = normalize_name(&monster.name, &self.name, env.rules.max_name_length)?;
        let message = format!("Monster renamed to \"{name}\"!");
        monster.name = name;
        Ok(ActionResult::message(message))
    }
}
