//! Monster client binary.
//!
//! ```bash
//! monster alice adopt
//! monster alice feed
//! MONSTER_SEED=7 monster alice train
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use monster_client::{Cli, ClientConfig, Invocation, build_runtime, execute, logging};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let invocation = Invocation::from(Cli::parse());

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config.log_dir)?;
    tracing::info!("{} -> {:?}", invocation.owner, invocation.command);

    let runtime = build_runtime(&config).await?;
    let result = execute(&runtime, invocation).await;
    runtime.shutdown().await?;

    match result {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!("Command failed: {:#}", e);
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
