//! Topic-based event bus for runtime events.
//!
//! The worker publishes an event after every adoption and every resolved or
//! rejected action. Consumers subscribe only to the topics they need.

mod bus;

pub use bus::{EventBus, GameEvent, Topic};
