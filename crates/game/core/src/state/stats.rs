//! The seven-attribute stat block carried by every monster.

/// Lower bound shared by every stat.
pub const STAT_MIN: i32 = 0;
/// Upper bound shared by every stat.
pub const STAT_MAX: i32 = 100;

/// Names one attribute of a [`StatBlock`].
///
/// The first five are the combat stats that training can raise; `Mood` and
/// `Energy` are condition meters driven by feed/rest and passive regeneration.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Strength,
    Intelligence,
    Fortitude,
    Agility,
    Perception,
    Mood,
    Energy,
}

impl StatKind {
    /// Combat stats in catalog order. Random training targets index into this.
    pub const COMBAT: [StatKind; 5] = [
        StatKind::Strength,
        StatKind::Intelligence,
        StatKind::Fortitude,
        StatKind::Agility,
        StatKind::Perception,
    ];

    /// Capitalized label used in player-facing messages ("Strength +2").
    pub const fn label(self) -> &'static str {
        match self {
            StatKind::Strength => "Strength",
            StatKind::Intelligence => "Intelligence",
            StatKind::Fortitude => "Fortitude",
            StatKind::Agility => "Agility",
            StatKind::Perception => "Perception",
            StatKind::Mood => "Mood",
            StatKind::Energy => "Energy",
        }
    }
}

/// Five combat attributes as authored in the species catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub strength: i32,
    pub intelligence: i32,
    pub fortitude: i32,
    pub agility: i32,
    pub perception: i32,
}

impl BaseStats {
    pub const fn new(
        strength: i32,
        intelligence: i32,
        fortitude: i32,
        agility: i32,
        perception: i32,
    ) -> Self {
        Self {
            strength,
            intelligence,
            fortitude,
            agility,
            perception,
        }
    }
}

/// Current condition of a monster.
///
/// # Invariants
///
/// Every field lies in `[STAT_MIN, STAT_MAX]` once [`StatBlock::clamp_all`]
/// has run. The engine clamps after every resolution, and all mutation
/// helpers here clamp the field they touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub strength: i32,
    pub intelligence: i32,
    pub fortitude: i32,
    pub agility: i32,
    pub perception: i32,
    pub mood: i32,
    pub energy: i32,
}

impl StatBlock {
    /// Builds a fresh block from species base stats with the given condition meters.
    pub const fn from_base(base: BaseStats, mood: i32, energy: i32) -> Self {
        Self {
            strength: base.strength,
            intelligence: base.intelligence,
            fortitude: base.fortitude,
            agility: base.agility,
            perception: base.perception,
            mood,
            energy,
        }
    }

    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Strength => self.strength,
            StatKind::Intelligence => self.intelligence,
            StatKind::Fortitude => self.fortitude,
            StatKind::Agility => self.agility,
            StatKind::Perception => self.perception,
            StatKind::Mood => self.mood,
            StatKind::Energy => self.energy,
        }
    }

    pub fn get_mut(&mut self, stat: StatKind) -> &mut i32 {
        match stat {
            StatKind::Strength => &mut self.strength,
            StatKind::Intelligence => &mut self.intelligence,
            StatKind::Fortitude => &mut self.fortitude,
            StatKind::Agility => &mut self.agility,
            StatKind::Perception => &mut self.perception,
            StatKind::Mood => &mut self.mood,
            StatKind::Energy => &mut self.energy,
        }
    }

    /// Adds `delta` to `stat` and clamps the result into bounds.
    pub fn adjust(&mut self, stat: StatKind, delta: i32) {
        let value = self.get_mut(stat);
        *value = value.saturating_add(delta).clamp(STAT_MIN, STAT_MAX);
    }

    /// Clamps all seven fields into `[STAT_MIN, STAT_MAX]`.
    pub fn clamp_all(&mut self) {
        for stat in StatKind::COMBAT
            .into_iter()
            .chain([StatKind::Mood, StatKind::Energy])
        {
            let value = self.get_mut(stat);
            *value = (*value).clamp(STAT_MIN, STAT_MAX);
        }
    }

    /// Returns true when every field is within bounds.
    pub fn is_within_bounds(&self) -> bool {
        StatKind::COMBAT
            .into_iter()
            .chain([StatKind::Mood, StatKind::Energy])
            .all(|stat| (STAT_MIN..=STAT_MAX).contains(&self.get(stat)))
    }
}
