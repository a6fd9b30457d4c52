//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! adopting monsters, performing actions and reading history.
use tokio::sync::{broadcast, mpsc, oneshot};

use monster_core::{ActionCommand, ActionOutcome, ActionRecord, Monster, UserId};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, GameEvent, Topic};
use crate::workers::{Command, MonsterStatus};

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    history_limit: usize,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        history_limit: usize,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            history_limit,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<Result<T>>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Return the owner's monster, generating it from `identity` on first
    /// adoption. Later calls ignore `identity`.
    pub async fn adopt(&self, owner: UserId, identity: impl Into<String>) -> Result<Monster> {
        let identity = identity.into();
        self.request(|reply| Command::Adopt {
            owner,
            identity,
            reply,
        })
        .await
    }

    /// Resolve one action for the owner's monster and persist the result.
    pub async fn perform(&self, owner: UserId, command: ActionCommand) -> Result<ActionOutcome> {
        self.request(|reply| Command::Perform {
            owner,
            command,
            reply,
        })
        .await
    }

    /// Like [`RuntimeHandle::perform`], parsing the action kind from text.
    ///
    /// `argument` is the new name for `rename` and ignored otherwise.
    pub async fn perform_action(
        &self,
        owner: UserId,
        kind: &str,
        argument: Option<&str>,
    ) -> Result<ActionOutcome> {
        let command = ActionCommand::parse(kind, argument)?;
        self.perform(owner, command).await
    }

    pub async fn rename(&self, owner: UserId, name: impl Into<String>) -> Result<ActionOutcome> {
        self.perform(owner, ActionCommand::Rename { name: name.into() })
            .await
    }

    /// Stored snapshot of the owner's monster, if adopted.
    pub async fn monster(&self, owner: UserId) -> Result<Option<Monster>> {
        self.request(|reply| Command::Monster { owner, reply }).await
    }

    /// Current energy (with regeneration) and remaining actions for today.
    pub async fn status(&self, owner: UserId) -> Result<MonsterStatus> {
        self.request(|reply| Command::Status { owner, reply }).await
    }

    /// Newest-first action history, capped at the configured history limit.
    pub async fn recent_actions(&self, owner: UserId, limit: usize) -> Result<Vec<ActionRecord>> {
        let limit = limit.min(self.history_limit);
        self.request(|reply| Command::RecentActions {
            owner,
            limit,
            reply,
        })
        .await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Adoption` - monsters bound to an account
    /// - `Topic::Action` - resolved and rejected actions
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<GameEvent>> {
        self.event_bus.subscribe_multiple(topics)
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }
}
