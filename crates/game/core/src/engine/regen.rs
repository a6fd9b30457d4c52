//! Passive energy regeneration.
//!
//! Idle time restores energy at a fixed hourly rate, gated by the mood the
//! monster had *before* regeneration:
//!
//! | mood        | regen                                  |
//! |-------------|----------------------------------------|
//! | `>= 80`     | `floor(h * 5) + floor(h)`              |
//! | `50..80`    | `floor(h * 5)`                         |
//! | `20..50`    | `floor(h * 5) - floor(h)`              |
//! | `< 20`      | `0`                                    |

use chrono::{DateTime, Utc};

use crate::config::GameRules;
use crate::state::{StatKind, StatBlock};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Fractional hours between `since` and `now`. Never negative; a missing
/// `since` counts as no elapsed time.
pub fn elapsed_hours(since: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(since) = since else {
        return 0.0;
    };
    let millis = (now - since).num_milliseconds();
    (millis as f64 / MILLIS_PER_HOUR).max(0.0)
}

/// Energy regained over `hours` at the given pre-regeneration mood.
pub fn passive_regen(mood: i32, hours: f64, rules: &GameRules) -> i32 {
    if mood < rules.rebellious_mood {
        return 0;
    }

    let hours = hours.max(0.0);
    let base = (hours * f64::from(rules.regen_per_hour)).floor() as i32;

    if mood >= rules.joyful_mood {
        base + (hours * f64::from(rules.joyful_bonus_per_hour)).floor() as i32
    } else if mood < rules.moody_mood {
        base - (hours * f64::from(rules.moody_penalty_per_hour)).floor() as i32
    } else {
        base
    }
}

/// Folds passive regeneration into `stats` and returns the applied delta
/// before clamping.
pub fn apply_regen(
    stats: &mut StatBlock,
    last_action_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    rules: &GameRules,
) -> i32 {
    let regen = passive_regen(stats.mood, elapsed_hours(last_action_at, now), rules);
    stats.adjust(StatKind::Energy, regen);
    regen
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn mood_gates_the_rate() {
        let rules = GameRules::default();
        assert_eq!(passive_regen(10, 10.0, &rules), 0);
        assert_eq!(passive_regen(19, 10.0, &rules), 0);
        assert_eq!(passive_regen(20, 10.0, &rules), 40);
        assert_eq!(passive_regen(49, 10.0, &rules), 40);
        assert_eq!(passive_regen(50, 10.0, &rules), 50);
        assert_eq!(passive_regen(79, 10.0, &rules), 50);
        assert_eq!(passive_regen(80, 10.0, &rules), 60);
        assert_eq!(passive_regen(90, 10.0, &rules), 60);
    }

    #[test]
    fn partial_hours_floor_each_term() {
        let rules = GameRules::default();
        // floor(2.5 * 5) = 12, floor(2.5) = 2
        assert_eq!(passive_regen(90, 2.5, &rules), 14);
        assert_eq!(passive_regen(30, 2.5, &rules), 10);
        assert_eq!(passive_regen(60, 0.1, &rules), 0);
        assert_eq!(passive_regen(60, 0.2, &rules), 1);
    }

    #[test]
    fn elapsed_time_never_goes_negative() {
        let now = noon();
        assert_eq!(elapsed_hours(None, now), 0.0);
        assert_eq!(elapsed_hours(Some(now + Duration::hours(3)), now), 0.0);
        assert_eq!(elapsed_hours(Some(now - Duration::minutes(90)), now), 1.5);
    }

    #[test]
    fn applied_regen_is_clamped() {
        let rules = GameRules::default();
        let mut stats = StatBlock {
            strength: 10,
            intelligence: 10,
            fortitude: 10,
            agility: 10,
            perception: 10,
            mood: 90,
            energy: 70,
        };

        let delta = apply_regen(
            &mut stats,
            Some(noon() - Duration::hours(10)),
            noon(),
            &rules,
        );

        assert_eq!(delta, 60);
        assert_eq!(stats.energy, 100);
        assert_eq!(stats.mood, 90);
    }
}
