//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use monster_core::{ActionKind, ActionRecord, Monster, UserId};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Monsters bound to an account
    Adoption,
    /// Resolved and rejected actions
    Action,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Adoption, Topic::Action];
}

/// Notifications emitted by the action worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    MonsterAdopted {
        owner: UserId,
        monster: Monster,
    },
    ActionPerformed {
        owner: UserId,
        monster: Monster,
        record: ActionRecord,
    },
    ActionRejected {
        owner: UserId,
        kind: ActionKind,
        /// Player-facing reason, as rendered by the error's `Display`.
        reason: String,
    },
}

impl GameEvent {
    pub fn topic(&self) -> Topic {
        match self {
            GameEvent::MonsterAdopted { .. } => Topic::Adoption,
            GameEvent::ActionPerformed { .. } | GameEvent::ActionRejected { .. } => Topic::Action,
        }
    }

    pub fn owner(&self) -> &UserId {
        match self {
            GameEvent::MonsterAdopted { owner, .. }
            | GameEvent::ActionPerformed { owner, .. }
            | GameEvent::ActionRejected { owner, .. } => owner,
        }
    }
}

/// Topic-based event bus
///
/// Channels are created up front for every topic and never change, so the
/// bus can be cloned freely and shared without locking.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<GameEvent>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity.max(1)).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its topic. Delivery is best-effort.
    pub fn publish(&self, event: GameEvent) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // Every topic is registered in `with_capacity`.
            None => broadcast::channel(1).1,
        }
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<GameEvent>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(owner: &str) -> GameEvent {
        GameEvent::ActionRejected {
            owner: UserId::new(owner),
            kind: ActionKind::Train,
            reason: "tired".into(),
        }
    }

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut actions = bus.subscribe(Topic::Action);
        let mut adoptions = bus.subscribe(Topic::Adoption);

        bus.publish(rejected("alice"));

        let event = actions.recv().await.unwrap();
        assert_eq!(event.owner(), &UserId::new("alice"));
        assert!(adoptions.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        EventBus::new().publish(rejected("nobody"));
    }
}
