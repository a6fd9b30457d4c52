//! Action worker that owns every monster read-modify-write.
//!
//! Receives commands from [`crate::RuntimeHandle`], resolves them with
//! [`monster_core::GameEngine`], persists the result and publishes events.
//! Commands are handled one at a time, which gives at-most-one-in-flight
//! action per monster without any locking in the repositories.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use monster_core::{
    ActionCommand, ActionOutcome, ActionRecord, Catalog, Clock, GameEngine, GameRules, Monster,
    RandomSource, UserId,
};

use crate::api::{Result, RuntimeError};
use crate::events::{EventBus, GameEvent};
use crate::repository::{ActionRepository, MonsterRepository};

/// Commands that can be sent to the action worker
pub enum Command {
    /// Return the owner's monster, generating and binding one on first call.
    Adopt {
        owner: UserId,
        identity: String,
        reply: oneshot::Sender<Result<Monster>>,
    },
    /// Resolve and commit one action.
    Perform {
        owner: UserId,
        command: ActionCommand,
        reply: oneshot::Sender<Result<ActionOutcome>>,
    },
    /// Stored snapshot, without regeneration applied.
    Monster {
        owner: UserId,
        reply: oneshot::Sender<Result<Option<Monster>>>,
    },
    Status {
        owner: UserId,
        reply: oneshot::Sender<Result<MonsterStatus>>,
    },
    RecentActions {
        owner: UserId,
        limit: usize,
        reply: oneshot::Sender<Result<Vec<ActionRecord>>>,
    },
}

/// Read-only view of a monster at the current instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStatus {
    pub monster: Monster,
    /// Energy including passive regeneration accrued since the last action.
    pub energy_now: i32,
    pub remaining_actions: u32,
}

/// Background task that processes monster commands.
pub struct ActionWorker {
    catalog: Catalog,
    rules: GameRules,
    monsters: Arc<dyn MonsterRepository>,
    actions: Arc<dyn ActionRepository>,
    clock: Arc<dyn Clock>,
    rng: Box<dyn RandomSource + Send>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl ActionWorker {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        catalog: Catalog,
        rules: GameRules,
        monsters: Arc<dyn MonsterRepository>,
        actions: Arc<dyn ActionRepository>,
        clock: Arc<dyn Clock>,
        rng: Box<dyn RandomSource + Send>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        tracing::info!(
            "ActionWorker initialized with daily limit {}",
            rules.daily_action_limit
        );

        Self {
            catalog,
            rules,
            monsters,
            actions,
            clock,
            rng,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!("ActionWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Adopt {
                owner,
                identity,
                reply,
            } => {
                let result = self.handle_adopt(owner, &identity);
                if reply.send(result).is_err() {
                    debug!("Adopt reply channel closed (caller dropped)");
                }
            }
            Command::Perform {
                owner,
                command,
                reply,
            } => {
                let result = self.handle_perform(owner, command);
                if reply.send(result).is_err() {
                    debug!("Perform reply channel closed (caller dropped)");
                }
            }
            Command::Monster { owner, reply } => {
                let result = self.monsters.load_by_owner(&owner).map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!("Monster reply channel closed (caller dropped)");
                }
            }
            Command::Status { owner, reply } => {
                let result = self.handle_status(&owner);
                if reply.send(result).is_err() {
                    debug!("Status reply channel closed (caller dropped)");
                }
            }
            Command::RecentActions {
                owner,
                limit,
                reply,
            } => {
                let result = self.handle_recent(&owner, limit);
                if reply.send(result).is_err() {
                    debug!("RecentActions reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn engine(&self) -> GameEngine<'_> {
        GameEngine::new(&self.catalog, &self.rules)
    }

    fn require_monster(&self, owner: &UserId) -> Result<Monster> {
        self.monsters
            .load_by_owner(owner)?
            .ok_or_else(|| RuntimeError::MonsterNotFound(owner.clone()))
    }

    fn handle_adopt(&mut self, owner: UserId, identity: &str) -> Result<Monster> {
        if let Some(existing) = self.monsters.load_by_owner(&owner)? {
            debug!("{} already owns {}", owner, existing.id);
            return Ok(existing);
        }

        let monster = self
            .engine()
            .generate(identity, self.clock.now())
            .owned_by(owner.clone());
        self.monsters.save(&monster)?;

        info!(
            "{} adopted {} the {} ({}, {})",
            owner, monster.name, monster.species, monster.element, monster.size
        );
        self.event_bus.publish(GameEvent::MonsterAdopted {
            owner,
            monster: monster.clone(),
        });

        Ok(monster)
    }

    fn handle_perform(&mut self, owner: UserId, command: ActionCommand) -> Result<ActionOutcome> {
        let kind = command.kind();
        let current = self.require_monster(&owner)?;
        let now = self.clock.now();

        let engine = GameEngine::new(&self.catalog, &self.rules);
        let outcome = match engine.resolve(&current, &command, now, self.rng.as_mut()) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("{} {} rejected for {}: {}", kind, current.id, owner, e);
                self.event_bus.publish(GameEvent::ActionRejected {
                    owner,
                    kind,
                    reason: e.to_string(),
                });
                return Err(e.into());
            }
        };

        if let Err(e) = self.monsters.save(&outcome.monster) {
            error!("Failed to save {} after {}: {}", current.id, kind, e);
            return Err(e.into());
        }

        if let Err(e) = self.actions.append(&outcome.record) {
            error!(
                "Failed to append {} record for {}: {}; restoring previous snapshot",
                kind, current.id, e
            );
            if let Err(restore) = self.monsters.save(&current) {
                error!("Failed to restore snapshot of {}: {}", current.id, restore);
            }
            return Err(e.into());
        }

        info!("{}: {}", owner, outcome.record.result.message);
        debug!(
            regen = outcome.regen,
            actions_today = outcome.monster.actions_today,
            energy = outcome.monster.stats.energy,
            mood = outcome.monster.stats.mood,
            "{} resolved {}",
            current.id,
            kind
        );

        self.event_bus.publish(GameEvent::ActionPerformed {
            owner,
            monster: outcome.monster.clone(),
            record: outcome.record.clone(),
        });

        Ok(outcome)
    }

    fn handle_status(&self, owner: &UserId) -> Result<MonsterStatus> {
        let monster = self.require_monster(owner)?;
        let now = self.clock.now();
        let engine = self.engine();

        Ok(MonsterStatus {
            energy_now: engine.projected_energy(&monster, now),
            remaining_actions: engine.remaining_actions(&monster, now),
            monster,
        })
    }

    fn handle_recent(&self, owner: &UserId, limit: usize) -> Result<Vec<ActionRecord>> {
        let monster = self.require_monster(owner)?;
        Ok(self.actions.recent(monster.id, limit)?)
    }
}
