//! Command-line parsing.
//!
//! ```text
//! monster <user> adopt [identity]
//! monster <user> status
//! monster <user> feed | train | rest
//! monster <user> rename <new name...>
//! monster <user> history [count]
//! monster <user> show
//! ```

use clap::{Parser, Subcommand};
use monster_core::{ActionCommand, UserId};

/// Raise a monster, a few actions a day
#[derive(Debug, Parser)]
#[command(name = "monster")]
#[command(about = "Raise a monster, a few actions a day", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Account that owns the monster
    #[arg(value_parser = parse_user)]
    pub user: UserId,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Adopt a monster (identity defaults to the user name)
    Adopt { identity: Option<String> },

    /// Show stats, current energy and actions left today
    Status,

    /// Feed the monster
    Feed,

    /// Train the monster's favoured stat
    Train,

    /// Let the monster rest
    Rest,

    /// Give the monster a new name
    Rename { name: Vec<String> },

    /// Show recent actions, newest first
    History {
        #[arg(default_value_t = 10)]
        count: usize,
    },

    /// Print the stored monster as JSON
    Show,
}

fn parse_user(raw: &str) -> Result<UserId, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("user name cannot be empty".to_string());
    }
    Ok(UserId::new(trimmed))
}

/// One resolved invocation, ready for [`crate::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub owner: UserId,
    pub command: CliCommand,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Adopt with the given identity, or the user name when absent.
    Adopt { identity: Option<String> },
    Status,
    Perform(ActionCommand),
    History { limit: usize },
    /// Raw snapshot as JSON.
    Show,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        let command = match cli.command {
            Command::Adopt { identity } => CliCommand::Adopt { identity },
            Command::Status => CliCommand::Status,
            Command::Feed => CliCommand::Perform(ActionCommand::Feed),
            Command::Train => CliCommand::Perform(ActionCommand::Train),
            Command::Rest => CliCommand::Perform(ActionCommand::Rest),
            // Validation (empty, too long, unchanged) is left to the engine.
            Command::Rename { name } => CliCommand::Perform(ActionCommand::Rename {
                name: name.join(" "),
            }),
            Command::History { count } => CliCommand::History { limit: count },
            Command::Show => CliCommand::Show,
        };

        Self {
            owner: cli.user,
            command,
        }
    }
}
