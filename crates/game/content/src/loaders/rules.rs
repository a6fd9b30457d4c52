//! Game rules loader.

use std::path::Path;

use monster_core::GameRules;

use crate::loaders::{LoadResult, read_file};

/// Loader for game balance rules from TOML files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file. Keys missing from the file keep their
    /// default values.
    pub fn load(path: &Path) -> LoadResult<GameRules> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameRules> {
        let rules: GameRules = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        validate(&rules)?;
        Ok(rules)
    }
}

fn validate(rules: &GameRules) -> LoadResult<()> {
    let probabilities = [
        ("favorite_food_chance", rules.favorite_food_chance),
        ("water_bonus_chance", rules.water_bonus_chance),
        ("earth_dislike_chance", rules.earth_dislike_chance),
    ];
    for (key, value) in probabilities {
        anyhow::ensure!(
            (0.0..=1.0).contains(&value),
            "{key} must be within [0, 1], got {value}"
        );
    }

    let ranges = [
        ("plain_mood", rules.plain_mood_min, rules.plain_mood_max),
        ("train_gain", rules.train_gain_min, rules.train_gain_max),
        (
            "spirit_rest_mood",
            rules.spirit_rest_mood_min,
            rules.spirit_rest_mood_max,
        ),
    ];
    for (key, min, max) in ranges {
        anyhow::ensure!(min <= max, "{key}_min ({min}) exceeds {key}_max ({max})");
    }

    anyhow::ensure!(
        rules.max_name_length > 0,
        "max_name_length must be positive"
    );
    Ok(())
}
