//! High-level runtime orchestrator.
//!
//! The runtime owns the action worker, wires up the command channel and the
//! event bus, and exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use monster_core::{Catalog, Clock, GameRules, PcgRng, RandomSource, SystemClock};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{EventBus, GameEvent, Topic};
use crate::random::EntropyRandom;
use crate::repository::{
    ActionRepository, InMemoryActionRepo, InMemoryMonsterRepo, MonsterRepository,
};
use crate::workers::{ActionWorker, Command};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub rules: GameRules,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Upper bound on records returned by one history query.
    pub history_limit: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            history_limit: 50,
        }
    }
}

/// Main runtime that serializes monster commands.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events from one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker drains queued commands and exits once every handle clone
    /// is dropped, so callers should release their clones first.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
///
/// Unset collaborators default to the standard catalog, in-memory
/// repositories, the system clock and OS entropy.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<Catalog>,
    monsters: Option<Arc<dyn MonsterRepository>>,
    actions: Option<Arc<dyn ActionRepository>>,
    clock: Option<Arc<dyn Clock>>,
    rng: Option<Box<dyn RandomSource + Send>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
            monsters: None,
            actions: None,
            clock: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the game rules
    pub fn rules(mut self, rules: GameRules) -> Self {
        self.config.rules = rules;
        self
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn monster_repository(mut self, repo: Arc<dyn MonsterRepository>) -> Self {
        self.monsters = Some(repo);
        self
    }

    pub fn action_repository(mut self, repo: Arc<dyn ActionRepository>) -> Self {
        self.actions = Some(repo);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Use a custom randomness source.
    pub fn random_source(mut self, rng: impl RandomSource + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Use a seeded [`PcgRng`] so outcomes replay exactly.
    pub fn seed(self, seed: u64) -> Self {
        self.random_source(PcgRng::new(seed))
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Runtime> {
        let RuntimeBuilder {
            config,
            catalog,
            monsters,
            actions,
            clock,
            rng,
        } = self;

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let worker = ActionWorker::new(
            catalog.unwrap_or_else(Catalog::standard),
            config.rules,
            monsters.unwrap_or_else(|| Arc::new(InMemoryMonsterRepo::new())),
            actions.unwrap_or_else(|| Arc::new(InMemoryActionRepo::new())),
            clock.unwrap_or_else(|| Arc::new(SystemClock)),
            rng.unwrap_or_else(|| Box::new(EntropyRandom::new())),
            command_rx,
            event_bus.clone(),
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        let handle = RuntimeHandle::new(command_tx, event_bus, config.history_limit);

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
