//! Command-line client for the monster runtime.
//!
//! The binary is the composition root: it reads [`config::ClientConfig`]
//! from the environment, sets up file logging, builds a file-backed
//! [`monster_runtime::Runtime`] and runs a single [`cli::Invocation`].

pub mod app;
pub mod cli;
pub mod config;
pub mod dirs;
pub mod logging;

pub use app::{build_runtime, execute};
pub use cli::{Cli, CliCommand, Invocation};
pub use config::ClientConfig;
