/// Tunable constants for quota, action costs, and passive regeneration.
///
/// `Default` yields the canonical game balance. Data files may override any
/// subset of fields; the rest keep their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameRules {
    /// Quota-consuming actions allowed per UTC calendar day.
    pub daily_action_limit: u32,

    // ===== feed =====
    pub feed_cost: i32,
    pub feed_energy_gain: i32,
    pub favorite_energy_gain: i32,
    /// Probability in `[0, 1]` that the meal is the species' favorite food.
    pub favorite_food_chance: f64,
    pub favorite_mood_gain: i32,
    pub plain_mood_min: i32,
    pub plain_mood_max: i32,
    /// Highest mood gain a Fire monster accepts from a meal.
    pub fire_mood_cap: i32,
    pub water_bonus_chance: f64,
    pub water_bonus_mood: i32,
    pub earth_dislike_chance: f64,
    pub earth_dislike_mood: i32,

    // ===== train =====
    pub train_cost: i32,
    /// Secondary floor below which training is refused as "too tired".
    pub train_tired_floor: i32,
    pub train_base_chance: i32,
    pub train_bias_bonus: i32,
    pub train_large_agility_penalty: i32,
    pub train_small_fortitude_penalty: i32,
    pub train_gain_min: i32,
    pub train_gain_max: i32,
    pub train_success_mood: i32,
    pub train_failure_mood: i32,

    // ===== rest =====
    pub rest_energy_gain: i32,
    pub rest_mood_gain: i32,
    pub nature_rest_mood: i32,
    pub lightning_rest_mood: i32,
    pub metal_restless_mood: i32,
    /// Metal monsters get restless when resting above this energy.
    pub metal_restless_above: i32,
    pub spirit_rest_mood_min: i32,
    pub spirit_rest_mood_max: i32,

    // ===== passive regeneration =====
    pub regen_per_hour: i32,
    pub joyful_bonus_per_hour: i32,
    pub moody_penalty_per_hour: i32,
    /// Mood at or above which the joyful bonus applies.
    pub joyful_mood: i32,
    /// Mood below which the monster is moody and regenerates slower.
    pub moody_mood: i32,
    /// Mood below which passive regeneration stops entirely.
    pub rebellious_mood: i32,

    // ===== rename =====
    pub max_name_length: usize,
}

impl GameRules {
    pub const DEFAULT_DAILY_ACTION_LIMIT: u32 = 3;
    pub const DEFAULT_MAX_NAME_LENGTH: usize = 20;

    // ===== generation constants (not tunable: they define identity) =====
    pub const STARTING_MOOD: i32 = 50;
    pub const STARTING_ENERGY: i32 = 100;
    pub const STARTING_STAGE: u32 = 1;

    pub fn new() -> Self {
        Self {
            daily_action_limit: Self::DEFAULT_DAILY_ACTION_LIMIT,

            feed_cost: 10,
            feed_energy_gain: 20,
            favorite_energy_gain: 30,
            favorite_food_chance: 0.3,
            favorite_mood_gain: 10,
            plain_mood_min: -2,
            plain_mood_max: 3,
            fire_mood_cap: 5,
            water_bonus_chance: 0.2,
            water_bonus_mood: 5,
            earth_dislike_chance: 0.3,
            earth_dislike_mood: -3,

            train_cost: 30,
            train_tired_floor: 20,
            train_base_chance: 80,
            train_bias_bonus: 10,
            train_large_agility_penalty: 15,
            train_small_fortitude_penalty: 10,
            train_gain_min: 1,
            train_gain_max: 3,
            train_success_mood: 5,
            train_failure_mood: -5,

            rest_energy_gain: 40,
            rest_mood_gain: 10,
            nature_rest_mood: 15,
            lightning_rest_mood: -5,
            metal_restless_mood: -10,
            metal_restless_above: 70,
            spirit_rest_mood_min: 5,
            spirit_rest_mood_max: 24,

            regen_per_hour: 5,
            joyful_bonus_per_hour: 1,
            moody_penalty_per_hour: 1,
            joyful_mood: 80,
            moody_mood: 50,
            rebellious_mood: 20,

            max_name_length: Self::DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new()
    }
}
