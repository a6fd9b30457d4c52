use crate::action::{ActionEnv, ActionKind};
use crate::state::{ActionResult, Monster};

/// Defines how a concrete action variant rewrites a monster snapshot.
///
/// The engine runs the hooks in order on a working copy: `pre_validate`,
/// `apply`, then `post_validate`. Any error discards the copy, so a rejected
/// action never leaks partial changes. Validation hooks only read the
/// environment; randomness is drawn exclusively inside `apply`.
pub trait ActionTransition {
    type Error;

    /// Kind recorded in the action log.
    fn kind(&self) -> ActionKind;

    /// Validates pre-conditions using the snapshot **before** mutation
    /// (passive regeneration already applied).
    fn pre_validate(&self, _monster: &Monster, _env: &ActionEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action to the working copy and reports the requested
    /// deltas. Implementations may assume `pre_validate` has passed.
    fn apply(
        &self,
        monster: &mut Monster,
        env: &mut ActionEnv<'_>,
    ) -> Result<ActionResult, Self::Error>;

    /// Validates post-conditions using the snapshot **after** mutation.
    fn post_validate(&self, _monster: &Monster, _env: &ActionEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
