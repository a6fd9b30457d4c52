//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule rejections, worker coordination failures and repository
//! errors so clients can bubble them up with consistent context.

use monster_core::{ActionError, ErrorSeverity, GameError, UserId};
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A game-rule rejection. The message is meant for the player as-is.
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("no monster adopted for {0}")]
    MonsterNotFound(UserId),

    #[error("action worker command channel closed")]
    CommandChannelClosed,

    #[error("action worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("action worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// The rule rejection behind this error, if any.
    pub fn as_action(&self) -> Option<&ActionError> {
        match self {
            RuntimeError::Action(error) => Some(error),
            _ => None,
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Action(error) => error.severity(),
            RuntimeError::MonsterNotFound(_) => ErrorSeverity::Validation,
            RuntimeError::CommandChannelClosed
            | RuntimeError::ReplyChannelClosed(_)
            | RuntimeError::WorkerJoin(_) => ErrorSeverity::Fatal,
            RuntimeError::Repository(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Action(error) => error.error_code(),
            RuntimeError::MonsterNotFound(_) => "RUNTIME_MONSTER_NOT_FOUND",
            RuntimeError::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            RuntimeError::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            RuntimeError::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
        }
    }
}
