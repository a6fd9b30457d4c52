//! Action resolution pipeline.
//!
//! The [`GameEngine`] is the single authority over monster snapshots. Every
//! request takes a snapshot and returns a new one plus the matching log
//! record; the caller's copy is never touched, so a rejection leaves nothing
//! to roll back.
//!
//! Pipeline for quota-consuming actions:
//! quota check → passive regeneration → pre_validate → apply → post_validate
//! → clamp → counter commit → record.

mod quota;
pub mod regen;
mod transition;

pub use quota::DailyQuota;

use chrono::{DateTime, Utc};
use uuid::Builder;

use crate::action::{
    ActionCommand, ActionEnv, ActionError, ActionTransition, FeedAction, RenameAction, RestAction,
    TrainAction,
};
use crate::catalog::Catalog;
use crate::config::GameRules;
use crate::env::RandomSource;
use crate::generator::MonsterGenerator;
use crate::state::{ActionId, ActionRecord, Monster};

/// Successful resolution: the snapshot to persist and the record to append.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub monster: Monster,
    pub record: ActionRecord,
    /// Passive regeneration folded in before the action, before clamping.
    pub regen: i32,
}

/// Stateless rules engine over a catalog and a rule set.
#[derive(Clone, Copy, Debug)]
pub struct GameEngine<'a> {
    catalog: &'a Catalog,
    rules: &'a GameRules,
}

impl<'a> GameEngine<'a> {
    pub fn new(catalog: &'a Catalog, rules: &'a GameRules) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn rules(&self) -> &'a GameRules {
        self.rules
    }

    pub fn quota(&self) -> DailyQuota {
        DailyQuota::new(self.rules.daily_action_limit)
    }

    /// Deterministically generates the monster for `identity`.
    pub fn generate(&self, identity: &str, created_at: DateTime<Utc>) -> Monster {
        MonsterGenerator::new(self.catalog).generate(identity, created_at)
    }

    /// Actions still available to `monster` on the UTC day of `now`.
    pub fn remaining_actions(&self, monster: &Monster, now: DateTime<Utc>) -> u32 {
        self.quota().remaining(monster, now.date_naive())
    }

    /// Energy the monster would have right now once idle time is counted.
    pub fn projected_energy(&self, monster: &Monster, now: DateTime<Utc>) -> i32 {
        let mut stats = monster.stats;
        regen::apply_regen(&mut stats, monster.last_action_at, now, self.rules);
        stats.energy
    }

    /// Resolves one command against `monster` at `now`.
    ///
    /// On error the input snapshot is still authoritative and no record
    /// exists. Randomness is drawn only from `rng`.
    pub fn resolve(
        &self,
        monster: &Monster,
        command: &ActionCommand,
        now: DateTime<Utc>,
        rng: &mut dyn RandomSource,
    ) -> Result<ActionOutcome, ActionError> {
        match command {
            ActionCommand::Feed => self.run(&FeedAction, monster, now, rng),
            ActionCommand::Train => self.run(&TrainAction, monster, now, rng),
            ActionCommand::Rest => self.run(&RestAction, monster, now, rng),
            ActionCommand::Rename { name } => {
                self.run(&RenameAction::new(name.as_str()), monster, now, rng)
            }
        }
    }

    fn run<T>(
        &self,
        action: &T,
        monster: &Monster,
        now: DateTime<Utc>,
        rng: &mut dyn RandomSource,
    ) -> Result<ActionOutcome, ActionError>
    where
        T: ActionTransition<Error = ActionError>,
    {
        let kind = action.kind();
        let counted = kind.consumes_quota();

        let used = if counted {
            self.quota().check(monster, now.date_naive())?
        } else {
            0
        };

        let mut next = monster.clone();
        let regen = if counted {
            regen::apply_regen(&mut next.stats, monster.last_action_at, now, self.rules)
        } else {
            0
        };

        let mut env = ActionEnv::new(self.rules, self.catalog, rng);
        let result = transition::drive_transition(action, &mut next, &mut env)?;
        next.stats.clamp_all();

        if counted {
            next.last_action_at = Some(now);
            next.actions_today = used + 1;
        }

        let record = ActionRecord {
            id: next_action_id(&mut *env.rng),
            monster_id: next.id,
            kind,
            result,
            timestamp: now,
        };

        Ok(ActionOutcome {
            monster: next,
            record,
            regen,
        })
    }
}

/// Random v4-style record id built from two draws.
fn next_action_id(rng: &mut dyn RandomSource) -> ActionId {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&rng.next_u64().to_be_bytes());
    bytes[8..].copy_from_slice(&rng.next_u64().to_be_bytes());
    ActionId(Builder::from_random_bytes(bytes).into_uuid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::action::{ActionKind, NameError};
    use crate::catalog::Element;
    use crate::env::{PcgRng, ScriptedRandom};
    use crate::state::{SizeCategory, StatKind};
    use crate::test_utils::{epoch, monster};

    fn engine_parts() -> (Catalog, GameRules) {
        (Catalog::standard(), GameRules::default())
    }

    #[test]
    fn fire_favorite_feed_scenario() {
        let (catalog, rules) = engine_parts();
        let engine = GameEngine::new(&catalog, &rules);
        let fire = monster(Element::Fire, SizeCategory::Medium);
        let mut rng = ScriptedRandom::new().with_floats([0.0]);

        let outcome = engine
            .resolve(&fire, &ActionCommand::Feed, epoch(), &mut rng)
            .unwrap();

        assert_eq!(outcome.monster.stats.mood, 55);
        assert_eq!(outcome.monster.stats.energy, 100);
        assert_eq!(outcome.monster.actions_today, 1);
        assert_eq!(outcome.monster.last_action_at, Some(epoch()));
        assert_eq!(outcome.record.kind, ActionKind::Feed);
        assert_eq!(outcome.record.monster_id, fire.id);
        assert_eq!(outcome.record.timestamp, epoch());
        assert_eq!(outcome.record.result.energy_change, Some(20));
        // Caller's snapshot is untouched.
        assert_eq!(fire.actions_today, 0);
    }

    #[test]
    fn fourth_action_same_day_is_rejected_then_resets() {
        let (catalog, rules) = engine_parts();
        let engine = GameEngine::new(&catalog, &rules);
        let mut current = monster(Element::Nature, SizeCategory::Medium);
        let mut rng = PcgRng::new(11);
        let mut now = epoch();

        for expected in 1..=3 {
            let outcome = engine
                .resolve(&current, &ActionCommand::Rest, now, &mut rng)
                .unwrap();
            assert_eq!(outcome.monster.actions_today, expected);
            current = outcome.monster;
            now += Duration::minutes(30);
        }

        let err = engine
            .resolve(&current, &ActionCommand::Rest, now, &mut rng)
            .unwrap_err();
        assert_eq!(err, ActionError::QuotaExceeded { limit: 3 });
        assert_eq!(engine.remaining_actions(&current, now), 0);

        let tomorrow = epoch() + Duration::days(1);
        assert_eq!(engine.remaining_actions(&current, tomorrow), 3);
        let outcome = engine
            .resolve(&current, &ActionCommand::Rest, tomorrow, &mut rng)
            .unwrap();
        assert_eq!(outcome.monster.actions_today, 1);
    }

    #[test]
    fn regen_is_folded_in_before_cost_checks() {
        let (catalog, rules) = engine_parts();
        let engine = GameEngine::new(&catalog, &rules);
        let mut tired = monster(Element::Fire, SizeCategory::Medium);
        tired.stats.energy = 5;
        tired.stats.mood = 60;
        tired.actions_today = 1;
        tired.last_action_at = Some(epoch());

        let now = epoch() + Duration::hours(1);
        assert_eq!(engine.projected_energy(&tired, now), 10);

        let mut rng = ScriptedRandom::new().with_floats([0.9]).with_ints([0]);
        let outcome = engine
            .resolve(&tired, &ActionCommand::Feed, now, &mut rng)
            .unwrap();

        assert_eq!(outcome.regen, 5);
        assert_eq!(outcome.monster.stats.energy, 20);
        assert_eq!(outcome.monster.actions_today, 2);
    }

    #[test]
    fn rebellious_monster_gets_no_regen() {
        let (catalog, rules) = engine_parts();
        let engine = GameEngine::new(&catalog, &rules);
        let mut sulking = monster(Element::Fire, SizeCategory::Medium);
        sulking.stats.mood = 10;
        sulking.stats.energy = 0;
        sulking.last_action_at = Some(epoch());

        let now = epoch() + Duration::hours(10);
        assert_eq!(engine.projected_energy(&sulking, now), 0);

        let err = engine
            .resolve(&sulking, &ActionCommand::Feed, now, &mut ScriptedRandom::new())
            .unwrap_err();
        assert!(matches!(err, ActionError::InsufficientEnergy { available: 0, .. }));
    }

    #[test]
    fn rejected_action_leaves_no_trace() {
        let (catalog, rules) = engine_parts();
        let engine = GameEngine::new(&catalog, &rules);
        let mut weary = monster(Element::Fire, SizeCategory::Medium);
        weary.stats.energy = 25;
        let before = weary.clone();
        let mut rng = ScriptedRandom::new().with_floats([0.0]);

        let err = engine
            .resolve(&weary, &ActionCommand::Train, epoch(), &mut rng)
            .unwrap_err();

        assert_eq!(
            err,
            ActionError::InsufficientEnergy {
                action: ActionKind::Train,
                required: 30,
                available: 25,
            }
        );
        assert_eq!(weary, before);
        assert!(!rng.is_exhausted());
    }

    #[test]
    fn rename_skips_quota_and_regen() {
        let (catalog, rules) = engine_parts();
        let engine = GameEngine::new(&catalog, &rules);
        let mut named = monster(Element::Spirit, SizeCategory::Large);
        named.stats.energy = 40;
        named.actions_today = 3;
        named.last_action_at = Some(epoch());

        let later = epoch() + Duration::hours(4);
        let outcome = engine
            .resolve(
                &named,
                &ActionCommand::Rename {
                    name: "  Wisp ".into(),
                },
                later,
                &mut PcgRng::new(5),
            )
            .unwrap();

        assert_eq!(outcome.monster.name, "Wisp");
        assert_eq!(outcome.monster.stats, named.stats);
        assert_eq!(outcome.monster.actions_today, 3);
        assert_eq!(outcome.monster.last_action_at, Some(epoch()));
        assert_eq!(outcome.record.kind, ActionKind::Rename);
        assert_eq!(outcome.record.result.message, "Monster renamed to \"Wisp\"!");
        assert_eq!(outcome.regen, 0);

        let err = engine
            .resolve(
                &outcome.monster,
                &ActionCommand::Rename {
                    name: "Wisp".into(),
                },
                later,
                &mut PcgRng::new(5),
            )
            .unwrap_err();
        assert_eq!(err, ActionError::InvalidName(NameError::Unchanged));
    }

    #[test]
    fn stats_stay_in_bounds_over_long_runs() {
        let (catalog, rules) = engine_parts();
        let engine = GameEngine::new(&catalog, &rules);
        let commands = [ActionCommand::Feed, ActionCommand::Train, ActionCommand::Rest];

        for seed in 0..16u64 {
            let mut rng = PcgRng::new(seed);
            let mut current = engine.generate(&format!("bounds-{seed}"), epoch());
            let mut now = epoch();

            for step in 0..300usize {
                now += Duration::hours(((step * 7) % 13) as i64);
                let command = &commands[(step + seed as usize) % commands.len()];
                if let Ok(outcome) = engine.resolve(&current, command, now, &mut rng) {
                    assert!(outcome.monster.stats.is_within_bounds());
                    current = outcome.monster;
                }
                assert!(current.stats.is_within_bounds());
                assert!(current.actions_today <= rules.daily_action_limit);
            }
        }
    }

    #[test]
    fn seeded_sources_replay_identically() {
        let (catalog, rules) = engine_parts();
        let engine = GameEngine::new(&catalog, &rules);
        let start = engine.generate("replay", epoch());

        let run = |seed: u64| {
            let mut rng = PcgRng::new(seed);
            let mut current = start.clone();
            let mut records = Vec::new();
            for (n, command) in [ActionCommand::Train, ActionCommand::Feed, ActionCommand::Rest]
                .iter()
                .enumerate()
            {
                let now = epoch() + Duration::hours(n as i64 * 2);
                let outcome = engine.resolve(&current, command, now, &mut rng).unwrap();
                current = outcome.monster;
                records.push(outcome.record);
            }
            (current, records)
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn record_ids_come_from_the_source() {
        let mut first = PcgRng::new(1);
        let mut second = PcgRng::new(1);
        assert_eq!(next_action_id(&mut first), next_action_id(&mut second));
        assert_ne!(next_action_id(&mut first), next_action_id(&mut PcgRng::new(2)));
    }

    #[test]
    fn training_gain_lands_on_bias_stat() {
        let (catalog, rules) = engine_parts();
        let engine = GameEngine::new(&catalog, &rules);
        let lightning = monster(Element::Lightning, SizeCategory::Small);
        let mut rng = ScriptedRandom::new().with_floats([0.0]).with_ints([1]);

        let outcome = engine
            .resolve(&lightning, &ActionCommand::Train, epoch(), &mut rng)
            .unwrap();

        assert_eq!(
            outcome.monster.stats.get(StatKind::Perception),
            lightning.stats.perception + 1
        );
    }
}
