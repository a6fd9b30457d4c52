//! Fixtures shared by unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::catalog::{Catalog, Element};
use crate::config::GameRules;
use crate::state::{Monster, MonsterId, SizeCategory, StatBlock};

pub(crate) fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
}

/// A Drake of the given element and size in starting condition.
pub(crate) fn monster(element: Element, size: SizeCategory) -> Monster {
    let catalog = Catalog::standard();
    let species = catalog.get("Drake").unwrap();
    Monster {
        id: MonsterId(uuid::Uuid::nil()),
        owner: None,
        name: format!("{element} {}", species.name),
        species: species.name.clone(),
        element,
        size,
        base_size: species.base_size,
        stats: StatBlock::from_base(
            species.base,
            GameRules::STARTING_MOOD,
            GameRules::STARTING_ENERGY,
        ),
        stage: GameRules::STARTING_STAGE,
        created_at: epoch(),
        last_action_at: None,
        actions_today: 0,
    }
}
