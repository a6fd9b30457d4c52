use super::{ActionEnv, ActionError, ActionKind, ActionTransition, signed};
use crate::catalog::Element;
use crate::state::{ActionResult, Monster, StatKind};

/// Feeds the monster: pays the feed cost out of the meal's energy and
/// shifts mood depending on the meal and the monster's element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedAction;

impl ActionTransition for FeedAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Feed
    }

    fn pre_validate(&self, monster: &Monster, env: &ActionEnv<'_>) -> Result<(), Self::Error> {
        let required = env.rules.feed_cost;
        if monster.stats.energy < required {
            return Err(ActionError::InsufficientEnergy {
                action: ActionKind::Feed,
                required,
                available: monster.stats.energy,
            });
        }
        if env.catalog.get(&monster.species).is_none() {
            return Err(ActionError::UnknownSpecies(monster.species.clone()));
        }
        Ok(())
    }

    fn apply(
        &self,
        monster: &mut Monster,
        env: &mut ActionEnv<'_>,
    ) -> Result<ActionResult, Self::Error> {
        let rules = env.rules;
        let catalog = env.catalog;
        let species = catalog
            .get(&monster.species)
            .ok_or_else(|| ActionError::UnknownSpecies(monster.species.clone()))?;

        let favorite = env.rng.chance(rules.favorite_food_chance);
        let (mut mood_change, energy_change) = if favorite {
            (
                rules.favorite_mood_gain,
                rules.favorite_energy_gain - rules.feed_cost,
            )
        } else {
            (
                env.rng
                    .range_inclusive(rules.plain_mood_min, rules.plain_mood_max),
                rules.feed_energy_gain - rules.feed_cost,
            )
        };

        match monster.element {
            // Overfed fire monsters get angry.
            Element::Fire => mood_change = mood_change.min(rules.fire_mood_cap),
            Element::Water => {
                if env.rng.chance(rules.water_bonus_chance) {
                    mood_change += rules.water_bonus_mood;
                }
            }
            Element::Earth => {
                if env.rng.chance(rules.earth_dislike_chance) {
                    mood_change += rules.earth_dislike_mood;
                }
            }
            _ => {}
        }

        monster.stats.adjust(StatKind::Mood, mood_change);
        monster.stats.adjust(StatKind::Energy, energy_change);

        let message = if favorite {
            format!(
                "{} loves the {}! Mood {}, Energy {}",
                monster.name,
                species.favorite_food,
                signed(mood_change),
                signed(energy_change)
            )
        } else {
            format!(
                "{} eats the food. Energy {}, Mood {}",
                monster.name,
                signed(energy_change),
                signed(mood_change)
            )
        };

        Ok(ActionResult {
            stat_gain: None,
            mood_change: Some(mood_change),
            energy_change: Some(energy_change),
            message,
        })
    }
}
