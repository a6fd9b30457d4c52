//! Composition root: wires content, repositories and the runtime, then runs
//! one invocation.

use std::sync::Arc;

use anyhow::{Context, Result};
use monster_content::ContentFactory;
use monster_core::{ActionOutcome, ActionRecord, Monster};
use monster_runtime::{
    FileActionRepository, FileMonsterRepository, MonsterStatus, Runtime, RuntimeConfig,
};

use crate::cli::{CliCommand, Invocation};
use crate::config::ClientConfig;

/// Assemble a file-backed runtime from `config`.
pub async fn build_runtime(config: &ClientConfig) -> Result<Runtime> {
    let content = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir.clone()),
        None => ContentFactory::bundled(),
    };
    let catalog = content.load_catalog()?;
    let rules = content.load_rules()?;
    tracing::debug!(
        "Loaded {} species from {}",
        catalog.len(),
        content.data_dir().display()
    );

    let monsters = FileMonsterRepository::new(config.monsters_dir())
        .with_context(|| format!("failed to open {}", config.monsters_dir().display()))?;
    let actions = FileActionRepository::new(config.actions_dir())
        .with_context(|| format!("failed to open {}", config.actions_dir().display()))?;

    let mut builder = Runtime::builder()
        .config(RuntimeConfig {
            rules,
            ..RuntimeConfig::default()
        })
        .catalog(catalog)
        .monster_repository(Arc::new(monsters))
        .action_repository(Arc::new(actions));
    if let Some(seed) = config.seed {
        tracing::info!("Using fixed RNG seed {}", seed);
        builder = builder.seed(seed);
    }

    Ok(builder.build().await?)
}

/// Run one invocation and return the text to print.
pub async fn execute(runtime: &Runtime, invocation: Invocation) -> Result<String> {
    let handle = runtime.handle();
    let Invocation { owner, command } = invocation;

    let output = match command {
        CliCommand::Adopt { identity } => {
            let identity = identity.unwrap_or_else(|| owner.to_string());
            handle.adopt(owner.clone(), identity).await?;
            let status = handle.status(owner).await?;
            format!("Your monster:\n{}", render_status(&status))
        }
        CliCommand::Status => render_status(&handle.status(owner).await?),
        CliCommand::Perform(command) => {
            let outcome = handle.perform(owner, command).await?;
            render_outcome(&outcome)
        }
        CliCommand::History { limit } => render_history(&handle.recent_actions(owner, limit).await?),
        CliCommand::Show => {
            let monster = handle
                .monster(owner.clone())
                .await?
                .ok_or(monster_runtime::RuntimeError::MonsterNotFound(owner))?;
            serde_json::to_string_pretty(&monster)?
        }
    };

    Ok(output)
}

fn render_header(monster: &Monster) -> String {
    let details = format!(
        "({}, {}, stage {})",
        monster.element, monster.size, monster.stage
    );
    // Generated names already read "<element> <species>".
    if monster.name == format!("{} {}", monster.element, monster.species) {
        format!("{} {}", monster.name, details)
    } else {
        format!("{} the {} {}", monster.name, monster.species, details)
    }
}

pub fn render_status(status: &MonsterStatus) -> String {
    let stats = &status.monster.stats;
    format!(
        "{}\nSTR {:>3}  INT {:>3}  FOR {:>3}  AGI {:>3}  PER {:>3}\nMood {}  Energy {}/100\nActions left today: {}",
        render_header(&status.monster),
        stats.strength,
        stats.intelligence,
        stats.fortitude,
        stats.agility,
        stats.perception,
        stats.mood,
        status.energy_now,
        status.remaining_actions,
    )
}

pub fn render_outcome(outcome: &ActionOutcome) -> String {
    let stats = &outcome.monster.stats;
    format!(
        "{}\nMood {}  Energy {}/100",
        outcome.record.result.message, stats.mood, stats.energy
    )
}

pub fn render_history(records: &[ActionRecord]) -> String {
    if records.is_empty() {
        return "No actions yet.".to_string();
    }
    records
        .iter()
        .map(|record| {
            format!(
                "{}  {:<6}  {}",
                record.timestamp.format("%Y-%m-%d %H:%M"),
                record.kind,
                record.result.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use clap::Parser;
    use monster_core::{Catalog, MonsterGenerator};
    use tempfile::TempDir;

    use crate::cli::Cli;

    fn config(dir: &TempDir) -> ClientConfig {
        ClientConfig {
            data_dir: dir.path().join("data"),
            content_dir: None,
            log_dir: dir.path().join("logs"),
            seed: Some(5),
        }
    }

    async fn run(config: &ClientConfig, args: &[&str]) -> Result<String> {
        let runtime = build_runtime(config).await?;
        let cli = Cli::try_parse_from(std::iter::once("monster").chain(args.iter().copied()))?;
        let result = execute(&runtime, Invocation::from(cli)).await;
        runtime.shutdown().await?;
        result
    }

    #[tokio::test]
    async fn invocations_share_saved_state() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let adopted = run(&config, &["alice", "adopt"]).await.unwrap();
        assert!(adopted.contains("Actions left today: 3"));

        let rested = run(&config, &["alice", "rest"]).await.unwrap();
        assert!(rested.contains("rests and recovers"));

        let status = run(&config, &["alice", "status"]).await.unwrap();
        assert!(status.contains("Actions left today: 2"));

        let history = run(&config, &["alice", "history"]).await.unwrap();
        assert_eq!(history.lines().count(), 1);
        assert!(history.contains("rest"));

        let json = run(&config, &["alice", "show"]).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["owner"], "alice");
        assert_eq!(value["actions_today"], 1);
    }

    #[tokio::test]
    async fn rule_rejections_surface_verbatim() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let error = run(&config, &["bob", "feed"]).await.unwrap_err();
        assert_eq!(error.to_string(), "no monster adopted for bob");

        run(&config, &["bob", "adopt", "bobby"]).await.unwrap();
        for _ in 0..3 {
            run(&config, &["bob", "rest"]).await.unwrap();
        }
        let error = run(&config, &["bob", "rest"]).await.unwrap_err();
        assert_eq!(error.to_string(), "You have already performed 3 actions today!");
    }

    #[test]
    fn header_names_species_only_after_rename() {
        let catalog = Catalog::standard();
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut monster = MonsterGenerator::new(&catalog).generate("alice", created_at);
        let generated = monster.name.clone();

        let header = render_header(&monster);
        assert!(header.starts_with(&format!("{generated} (")));
        assert!(!header.contains(" the "));

        monster.name = "Sparky".into();
        let header = render_header(&monster);
        assert!(header.starts_with(&format!("Sparky the {} (", monster.species)));
    }

    #[test]
    fn empty_history_has_a_placeholder() {
        assert_eq!(render_history(&[]), "No actions yet.");
    }
}
