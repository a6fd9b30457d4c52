use super::{ActionEnv, ActionError, ActionKind, ActionTransition, signed};
use crate::catalog::Element;
use crate::state::{ActionResult, Monster, StatKind};

/// Rests the monster. Free, restores energy, and changes mood according to
/// the element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RestAction;

impl ActionTransition for RestAction {
    type Error = ActionError;

    fn kind(&self) -> ActionKind {
        ActionKind::Rest
    }

    fn apply(
        &self,
        monster: &mut Monster,
        env: &mut ActionEnv<'_>,
    ) -> Result<ActionResult, Self::Error> {
        let rules = env.rules;
        let mood_change = match monster.element {
            Element::Nature => rules.nature_rest_mood,
            Element::Lightning => rules.lightning_rest_mood,
            Element::Metal if monster.stats.energy > rules.metal_restless_above => {
                rules.metal_restless_mood
            }
            Element::Spirit => env
                .rng
                .range_inclusive(rules.spirit_rest_mood_min, rules.spirit_rest_mood_max),
            _ => rules.rest_mood_gain,
        };
        let energy_change = rules.rest_energy_gain;

        monster.stats.adjust(StatKind::Energy, energy_change);
        monster.stats.adjust(StatKind::Mood, mood_change);

        Ok(ActionResult {
            stat_gain: None,
            mood_change: Some(mood_change),
            energy_change: Some(energy_change),
            message: format!(
                "{} rests and recovers. Energy {}, Mood {}",
                monster.name,
                signed(energy_change),
                signed(mood_change)
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::GameRules;
    use crate::env::ScriptedRandom;
    use crate::state::SizeCategory;
    use crate::test_utils::monster;

    fn rest(monster: &mut Monster, rng: &mut ScriptedRandom) -> ActionResult {
        let rules = GameRules::default();
        let catalog = Catalog::standard();
        let mut env = ActionEnv::new(&rules, &catalog, rng);
        RestAction.apply(monster, &mut env).unwrap()
    }

    fn mood_after_rest(element: Element, energy: i32) -> i32 {
        let mut subject = monster(element, SizeCategory::Medium);
        subject.stats.energy = energy;
        rest(&mut subject, &mut ScriptedRandom::new()).mood_change.unwrap()
    }

    #[test]
    fn element_overlays_replace_base_mood() {
        assert_eq!(mood_after_rest(Element::Fire, 10), 10);
        assert_eq!(mood_after_rest(Element::Nature, 10), 15);
        assert_eq!(mood_after_rest(Element::Lightning, 10), -5);
    }

    #[test]
    fn metal_is_restless_only_when_not_tired() {
        assert_eq!(mood_after_rest(Element::Metal, 71), -10);
        assert_eq!(mood_after_rest(Element::Metal, 70), 10);
    }

    #[test]
    fn spirit_rolls_its_mood() {
        let mut spirit = monster(Element::Spirit, SizeCategory::Medium);
        let mut rng = ScriptedRandom::new().with_ints([24]);

        let result = rest(&mut spirit, &mut rng);

        assert_eq!(result.mood_change, Some(24));
        assert_eq!(spirit.stats.mood, 74);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn energy_restores_up_to_the_cap() {
        let mut fire = monster(Element::Fire, SizeCategory::Medium);
        fire.stats.energy = 80;

        let result = rest(&mut fire, &mut ScriptedRandom::new());

        assert_eq!(result.energy_change, Some(40));
        assert_eq!(fire.stats.energy, 100);
        assert_eq!(
            result.message,
            format!("{} rests and recovers. Energy +40, Mood +10", fire.name)
        );
    }
}
