//! Elemental affinity of a monster.
//!
//! An element decides three things: which stat training favors, which stat
//! gets a percentage boost at generation, and how the monster's mood reacts
//! to feed and rest (see [`crate::action`]).

use crate::state::StatKind;

/// One of eight elemental affinities.
///
/// Declaration order is load-bearing: the generator indexes [`Element::ALL`]
/// with a digest slice.
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
#[strum(ascii_case_insensitive)]
pub enum Element {
    Fire,
    Water,
    Nature,
    Shadow,
    Spirit,
    Metal,
    Lightning,
    Earth,
}

/// Percentage boost applied once to a single stat at generation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBonus {
    pub stat: StatKind,
    pub percent: i32,
}

impl StatBonus {
    /// `floor(value * (100 + percent) / 100)` in integer arithmetic.
    pub fn apply(&self, value: i32) -> i32 {
        (value * (100 + self.percent)).div_euclid(100)
    }
}

/// Flavor descriptions shown alongside an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementProfile {
    pub training: &'static str,
    pub stat_bonus: &'static str,
    pub matchup: &'static str,
    pub mood_trigger: &'static str,
}

impl Element {
    pub const COUNT: usize = 8;

    pub const ALL: [Element; Self::COUNT] = [
        Element::Fire,
        Element::Water,
        Element::Nature,
        Element::Shadow,
        Element::Spirit,
        Element::Metal,
        Element::Lightning,
        Element::Earth,
    ];

    /// Looks up an element by digest-derived index (wraps modulo 8).
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Stat that training targets for this element.
    ///
    /// Spirit and Metal register no bias; training picks a random combat stat.
    pub const fn training_bias(self) -> Option<StatKind> {
        match self {
            Element::Fire => Some(StatKind::Strength),
            Element::Water => Some(StatKind::Agility),
            Element::Nature => Some(StatKind::Fortitude),
            Element::Shadow => Some(StatKind::Intelligence),
            Element::Lightning => Some(StatKind::Perception),
            Element::Earth => Some(StatKind::Fortitude),
            Element::Spirit | Element::Metal => None,
        }
    }

    /// Generation-time stat multiplier. Spirit and Metal have none.
    pub const fn stat_bonus(self) -> Option<StatBonus> {
        let (stat, percent) = match self {
            Element::Fire => (StatKind::Strength, 5),
            Element::Water => (StatKind::Agility, 5),
            Element::Nature => (StatKind::Fortitude, 5),
            Element::Shadow => (StatKind::Intelligence, 5),
            Element::Lightning => (StatKind::Perception, 5),
            Element::Earth => (StatKind::Fortitude, 10),
            Element::Spirit | Element::Metal => return None,
        };
        Some(StatBonus { stat, percent })
    }

    pub const fn profile(self) -> ElementProfile {
        match self {
            Element::Fire => ElementProfile {
                training: "Strength",
                stat_bonus: "+5% Strength",
                matchup: "Bonus vs Nature, Weak vs Water",
                mood_trigger: "Angry if overfed",
            },
            Element::Water => ElementProfile {
                training: "Agility",
                stat_bonus: "+5% Agility",
                matchup: "Bonus vs Fire, Weak vs Lightning",
                mood_trigger: "Loves rainy days",
            },
            Element::Nature => ElementProfile {
                training: "Fortitude",
                stat_bonus: "+5% Fortitude",
                matchup: "Bonus vs Lightning, Weak vs Fire",
                mood_trigger: "Calms down from rest",
            },
            Element::Shadow => ElementProfile {
                training: "Intelligence",
                stat_bonus: "+5% Intelligence",
                matchup: "Bonus vs Light, Weak vs Spirit",
                mood_trigger: "High mood at night",
            },
            Element::Spirit => ElementProfile {
                training: "Mood-based Growth",
                stat_bonus: "+10% Mood Effects",
                matchup: "Bonus vs Shadow, Weak vs Metal",
                mood_trigger: "Evolves differently",
            },
            Element::Metal => ElementProfile {
                training: "Slower Overall Growth",
                stat_bonus: "+5% Resistances",
                matchup: "Bonus vs Spirit, Weak vs Nature",
                mood_trigger: "Becomes restless when idle",
            },
            Element::Lightning => ElementProfile {
                training: "Perception",
                stat_bonus: "+5% Perception",
                matchup: "Bonus vs Water, Weak vs Earth",
                mood_trigger: "Dislikes rest",
            },
            Element::Earth => ElementProfile {
                training: "Fortitude & Health",
                stat_bonus: "+10% Health",
                matchup: "Bonus vs Lightning, Weak vs Wind",
                mood_trigger: "Hates sweets",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_order_matches_declaration() {
        assert_eq!(Element::from_index(0), Element::Fire);
        assert_eq!(Element::from_index(4), Element::Spirit);
        assert_eq!(Element::from_index(7), Element::Earth);
        assert_eq!(Element::from_index(9), Element::Water);
    }

    #[test]
    fn stat_bonus_floors() {
        let fire = Element::Fire.stat_bonus().unwrap();
        assert_eq!(fire.apply(15), 15);
        assert_eq!(fire.apply(20), 21);

        let earth = Element::Earth.stat_bonus().unwrap();
        assert_eq!(earth.stat, StatKind::Fortitude);
        assert_eq!(earth.apply(30), 33);
        assert_eq!(earth.apply(9), 9);
    }

    #[test]
    fn spirit_and_metal_have_no_bias_or_bonus() {
        for element in [Element::Spirit, Element::Metal] {
            assert!(element.training_bias().is_none());
            assert!(element.stat_bonus().is_none());
        }
    }
}
