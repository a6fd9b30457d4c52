use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use monster_content::ContentFactory;
use monster_core::{
    ActionCommand, ActionError, ActionKind, FixedClock, GameError, NameError, UserId,
};
use monster_runtime::{
    FileActionRepository, FileMonsterRepository, GameEvent, Runtime, RuntimeConfig, RuntimeError,
    Topic,
};
use tempfile::TempDir;

fn morning() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
}

async fn runtime_at(clock: Arc<FixedClock>, seed: u64) -> Runtime {
    Runtime::builder()
        .clock(clock)
        .seed(seed)
        .build()
        .await
        .expect("runtime should start")
}

#[tokio::test]
async fn adoption_is_deterministic_and_idempotent() {
    let clock = Arc::new(FixedClock::new(morning()));
    let runtime = runtime_at(clock, 1).await;
    let handle = runtime.handle();
    let mut adoptions = handle.subscribe(Topic::Adoption);

    let alice = UserId::new("alice");
    let first = handle.adopt(alice.clone(), "alice").await.unwrap();
    let again = handle.adopt(alice.clone(), "someone-else").await.unwrap();
    let twin = handle.adopt(UserId::new("bob"), "alice").await.unwrap();

    assert_eq!(first, again);
    assert_eq!(first.owner, Some(alice.clone()));
    assert_eq!(first.id, twin.id);
    assert_eq!(first.species, twin.species);
    assert_eq!(first.stats, twin.stats);

    match adoptions.recv().await.unwrap() {
        GameEvent::MonsterAdopted { owner, monster } => {
            assert_eq!(owner, alice);
            assert_eq!(monster, first);
        }
        other => panic!("unexpected event: {other:?}"),
    }

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn fourth_action_of_the_day_is_rejected() {
    let clock = Arc::new(FixedClock::new(morning()));
    let runtime = runtime_at(clock.clone(), 7).await;
    let handle = runtime.handle();
    let owner = UserId::new("carol");
    handle.adopt(owner.clone(), "carol").await.unwrap();
    let mut actions = handle.subscribe(Topic::Action);

    for used in 1..=3 {
        let outcome = handle.perform(owner.clone(), ActionCommand::Rest).await.unwrap();
        assert_eq!(outcome.monster.actions_today, used);
        clock.advance(Duration::minutes(30));
    }
    let before = handle.monster(owner.clone()).await.unwrap().unwrap();

    let error = handle
        .perform(owner.clone(), ActionCommand::Feed)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        RuntimeError::Action(ActionError::QuotaExceeded { limit: 3 })
    ));
    assert_eq!(error.to_string(), "You have already performed 3 actions today!");

    let after = handle.monster(owner.clone()).await.unwrap().unwrap();
    assert_eq!(before, after);
    assert_eq!(handle.recent_actions(owner.clone(), 10).await.unwrap().len(), 3);
    assert_eq!(handle.status(owner.clone()).await.unwrap().remaining_actions, 0);

    let mut rejected = false;
    while let Ok(event) = actions.try_recv() {
        if let GameEvent::ActionRejected { kind, .. } = event {
            assert_eq!(kind, ActionKind::Feed);
            rejected = true;
        }
    }
    assert!(rejected);

    clock.set(morning() + Duration::days(1));
    assert_eq!(handle.status(owner.clone()).await.unwrap().remaining_actions, 3);
    let outcome = handle.perform(owner.clone(), ActionCommand::Rest).await.unwrap();
    assert_eq!(outcome.monster.actions_today, 1);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn rename_is_free_and_validated() {
    let clock = Arc::new(FixedClock::new(morning()));
    let runtime = runtime_at(clock, 3).await;
    let handle = runtime.handle();
    let owner = UserId::new("dave");
    handle.adopt(owner.clone(), "dave").await.unwrap();

    let outcome = handle.rename(owner.clone(), "  Sparky ").await.unwrap();
    assert_eq!(outcome.monster.name, "Sparky");
    assert_eq!(outcome.monster.actions_today, 0);
    assert_eq!(outcome.monster.last_action_at, None);
    assert_eq!(outcome.record.kind, ActionKind::Rename);
    assert_eq!(outcome.record.result.message, "Monster renamed to \"Sparky\"!");

    let error = handle.rename(owner.clone(), "Sparky").await.unwrap_err();
    assert!(matches!(
        error,
        RuntimeError::Action(ActionError::InvalidName(NameError::Unchanged))
    ));

    let error = handle
        .perform_action(owner.clone(), "rename", Some(&"x".repeat(21)))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Monster name must be 20 characters or less");

    assert_eq!(handle.status(owner.clone()).await.unwrap().remaining_actions, 3);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_kinds_and_owners_are_reported() {
    let clock = Arc::new(FixedClock::new(morning()));
    let runtime = runtime_at(clock, 5).await;
    let handle = runtime.handle();
    let owner = UserId::new("erin");

    let error = handle.perform(owner.clone(), ActionCommand::Rest).await.unwrap_err();
    assert!(matches!(error, RuntimeError::MonsterNotFound(ref who) if *who == owner));
    assert!(handle.monster(owner.clone()).await.unwrap().is_none());

    handle.adopt(owner.clone(), "erin").await.unwrap();
    let error = handle
        .perform_action(owner.clone(), "dance", None)
        .await
        .unwrap_err();
    assert_eq!(error.error_code(), "ACTION_UNKNOWN_KIND");
    assert_eq!(error.to_string(), "Unknown action type: dance");

    let outcome = handle
        .perform_action(owner.clone(), " REST ", None)
        .await
        .unwrap();
    assert_eq!(outcome.record.kind, ActionKind::Rest);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_requests_never_exceed_the_quota() {
    let clock = Arc::new(FixedClock::new(morning()));
    let runtime = runtime_at(clock, 11).await;
    let owner = UserId::new("frank");
    runtime.handle().adopt(owner.clone(), "frank").await.unwrap();

    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let handle = runtime.handle();
            let owner = owner.clone();
            tokio::spawn(async move { handle.perform(owner, ActionCommand::Rest).await })
        })
        .collect();

    let mut succeeded = 0;
    let mut over_quota = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(RuntimeError::Action(ActionError::QuotaExceeded { .. })) => over_quota += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(succeeded, 3);
    assert_eq!(over_quota, 7);
    let monster = runtime.handle().monster(owner).await.unwrap().unwrap();
    assert_eq!(monster.actions_today, 3);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn seeded_runtimes_replay_identically() {
    let script = [
        ActionCommand::Feed,
        ActionCommand::Train,
        ActionCommand::Rest,
    ];

    let mut runs = Vec::new();
    for _ in 0..2 {
        let clock = Arc::new(FixedClock::new(morning()));
        let runtime = runtime_at(clock.clone(), 42).await;
        let handle = runtime.handle();
        let owner = UserId::new("gina");
        handle.adopt(owner.clone(), "gina").await.unwrap();

        let mut outcomes = Vec::new();
        for command in &script {
            clock.advance(Duration::hours(2));
            outcomes.push(handle.perform(owner.clone(), command.clone()).await);
        }
        let outcomes: Vec<_> = outcomes
            .into_iter()
            .map(|r| r.map_err(|e| e.to_string()))
            .collect();
        runs.push(outcomes);

        drop(handle);
        runtime.shutdown().await.unwrap();
    }

    assert_eq!(runs[0], runs[1]);
}

#[tokio::test]
async fn history_is_newest_first_and_capped() {
    let clock = Arc::new(FixedClock::new(morning()));
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            history_limit: 2,
            ..RuntimeConfig::default()
        })
        .clock(clock.clone())
        .seed(9)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let owner = UserId::new("hank");
    handle.adopt(owner.clone(), "hank").await.unwrap();

    handle.perform(owner.clone(), ActionCommand::Rest).await.unwrap();
    clock.advance(Duration::minutes(5));
    handle.rename(owner.clone(), "Pebble").await.unwrap();
    clock.advance(Duration::minutes(5));
    handle.perform(owner.clone(), ActionCommand::Feed).await.unwrap();

    let history = handle.recent_actions(owner.clone(), 10).await.unwrap();
    let kinds: Vec<ActionKind> = history.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, [ActionKind::Feed, ActionKind::Rename]);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn file_backed_state_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let content = ContentFactory::bundled();
    let catalog = content.load_catalog().unwrap();
    let rules = content.load_rules().unwrap();
    let owner = UserId::new("ivy");
    let clock = Arc::new(FixedClock::new(morning()));

    let build = |clock: Arc<FixedClock>| {
        let monsters = Arc::new(FileMonsterRepository::new(temp_dir.path().join("monsters")).unwrap());
        let actions = Arc::new(FileActionRepository::new(temp_dir.path().join("actions")).unwrap());
        Runtime::builder()
            .catalog(catalog.clone())
            .rules(rules.clone())
            .monster_repository(monsters)
            .action_repository(actions)
            .clock(clock)
            .seed(13)
            .build()
    };

    let runtime = build(clock.clone()).await.unwrap();
    let handle = runtime.handle();
    let adopted = handle.adopt(owner.clone(), "ivy").await.unwrap();
    let first = handle.perform(owner.clone(), ActionCommand::Rest).await.unwrap();
    drop(handle);
    runtime.shutdown().await.unwrap();

    let runtime = build(clock.clone()).await.unwrap();
    let handle = runtime.handle();
    let reloaded = handle.monster(owner.clone()).await.unwrap().unwrap();
    assert_eq!(reloaded.id, adopted.id);
    assert_eq!(reloaded, first.monster);

    let history = handle.recent_actions(owner.clone(), 5).await.unwrap();
    assert_eq!(history, vec![first.record]);

    let second = handle.perform(owner.clone(), ActionCommand::Rest).await.unwrap();
    assert_eq!(second.monster.actions_today, 2);

    drop(handle);
    runtime.shutdown().await.unwrap();
}
