use crate::state::BaseStats;

/// Static reference data for one species.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species {
    pub name: String,
    /// Nominal body size before the size-category nudge.
    pub base_size: u32,
    pub base: BaseStats,
    pub special_ability: String,
    pub favorite_food: String,
}

impl Species {
    pub fn new(
        name: impl Into<String>,
        base_size: u32,
        base: BaseStats,
        special_ability: impl Into<String>,
        favorite_food: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_size,
            base,
            special_ability: special_ability.into(),
            favorite_food: favorite_food.into(),
        }
    }
}

/// The built-in roster, in generation index order.
pub(super) fn standard_roster() -> Vec<Species> {
    vec![
        Species::new(
            "Drake",
            1,
            BaseStats::new(20, 10, 15, 15, 10),
            "Flame Burst",
            "Spicy Jerky",
        ),
        Species::new(
            "Golem",
            3,
            BaseStats::new(25, 5, 30, 5, 8),
            "Stone Skin",
            "Ironroot Bark",
        ),
        Species::new(
            "Hellhound",
            1,
            BaseStats::new(18, 8, 10, 20, 12),
            "Inferno Howl",
            "Charcoal Biscuits",
        ),
        Species::new(
            "Gargoyle",
            1,
            BaseStats::new(16, 6, 20, 10, 14),
            "Petrify Glare",
            "Cave Mushrooms",
        ),
        Species::new(
            "Manticore",
            2,
            BaseStats::new(22, 12, 18, 14, 13),
            "Poison Spike",
            "Scorpion Honey",
        ),
        Species::new(
            "Kraken",
            3,
            BaseStats::new(28, 15, 25, 6, 9),
            "Tentacle Snare",
            "Salted Eel",
        ),
        Species::new(
            "Zombie Minotaur",
            2,
            BaseStats::new(24, 4, 22, 6, 7),
            "Undying Charge",
            "Rotroot Stew",
        ),
        Species::new(
            "Phoenix",
            1,
            BaseStats::new(14, 20, 12, 16, 18),
            "Rebirth Flame",
            "Sunfruit Nectar",
        ),
    ]
}
