//! Three-phase transition driver.

use crate::action::{ActionEnv, ActionTransition};
use crate::state::{ActionResult, Monster};

/// Runs a transition against a working copy.
///
/// Phases:
/// 1. `pre_validate` - check preconditions before mutation
/// 2. `apply` - mutate the copy and report the deltas
/// 3. `post_validate` - verify postconditions after mutation
#[inline]
pub(super) fn drive_transition<T>(
    transition: &T,
    monster: &mut Monster,
    env: &mut ActionEnv<'_>,
) -> Result<ActionResult, T::Error>
where
    T: ActionTransition,
{
    transition.pre_validate(monster, env)?;
    let result = transition.apply(monster, env)?;
    transition.post_validate(monster, env)?;
    Ok(result)
}
