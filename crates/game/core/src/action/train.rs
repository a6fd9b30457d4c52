use super::{ActionEnv, ActionError, ActionKind, ActionTransition, signed};
use crate::config::GameRules;
use crate::state::{ActionResult, Monster, SizeCategory, StatGain, StatKind};

/// Trains one combat stat. The energy cost is paid whether or not the
/// session succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainAction;

/// Success-chance shift from mood: `floor((mood - 50) / 5)`.
pub fn mood_modifier(mood: i32) -> i32 {
    (mood - 50).div_euclid(5)
}

/// Success chance in percent for training `target`.
///
/// Not clamped: values above 100 always succeed, values at or below 0
/// never do.
pub fn success_chance(monster: &Monster, target: StatKind, rules: &GameRules) -> i32 {
    let mut chance = rules.train_base_chance;
    if monster.element.training_bias() == Some(target) {
        chance += rules.train_bias_bonus;
    }
    chance += mood_modifier(monster.stats.mood);
    match (monster.size, target) {
        (SizeCategory::Large, StatKind::Agility) => chance -= rules.train_large_agility_penalty,
        (SizeCategory::Small, StatKind::Fortitude) => {
            chance -= rules.train_small_fortitude_penalty
        }
        _ => {}
    }
    chance
}

impl ActionTransition for TrainAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Train
    }

    fn pre_validate(&self, monster: &Monster, env: &ActionEnv<'_>) -> Result<(), Self::Error> {
        let energy = monster.stats.energy;
        if energy < env.rules.train_cost {
            return Err(ActionError::InsufficientEnergy {
                action: ActionKind::Train,
                required: env.rules.train_cost,
                available: energy,
            });
        }
        // Only reachable when the floor is configured above the cost.
        if energy < env.rules.train_tired_floor {
            return Err(ActionError::TooTired {
                name: monster.name.clone(),
                floor: env.rules.train_tired_floor,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        monster: &mut Monster,
        env: &mut ActionEnv<'_>,
    ) -> Result<ActionResult, Self::Error> {
        let rules = env.rules;
        let target = match monster.element.training_bias() {
            Some(stat) => stat,
            None => {
                let last = StatKind::COMBAT.len() as i32 - 1;
                let index = env.rng.range_inclusive(0, last).clamp(0, last);
                StatKind::COMBAT[index as usize]
            }
        };

        let chance = success_chance(monster, target, rules);
        let roll = env.rng.next_f64() * 100.0;
        let cost = rules.train_cost;

        if roll < f64::from(chance) {
            let gain = env
                .rng
                .range_inclusive(rules.train_gain_min, rules.train_gain_max);
            let mood_change = rules.train_success_mood;

            monster.stats.adjust(target, gain);
            monster.stats.adjust(StatKind::Mood, mood_change);
            monster.stats.adjust(StatKind::Energy, -cost);

            Ok(ActionResult {
                stat_gain: Some(StatGain {
                    stat: target,
                    amount: gain,
                }),
                mood_change: Some(mood_change),
                energy_change: Some(-cost),
                message: format!(
                    "Training successful! {} +{}, Mood {}, Energy -{}",
                    target.label(),
                    gain,
                    signed(mood_change),
                    cost
                ),
            })
        } else {
            let mood_change = rules.train_failure_mood;

            monster.stats.adjust(StatKind::Mood, mood_change);
            monster.stats.adjust(StatKind::Energy, -cost);

            Ok(ActionResult {
                stat_gain: None,
                mood_change: Some(mood_change),
                energy_change: Some(-cost),
                message: format!(
                    "Training failed! {} seems frustrated. Mood {}, Energy -{}",
                    monster.name,
                    signed(mood_change),
                    cost
                ),
            })
        }
    }
}
