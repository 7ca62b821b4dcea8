//! Pocket Trainer - Entry Point
//!
//! Runs the fixed scripted session: three trainers, each one shopping,
//! picking a starter and facing a wild creature in turn.

use pocket_trainer::core::{GameConfig, Result};
use pocket_trainer::simulation::Session;
use pocket_trainer::ui::StdTerminal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr; the game transcript owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pocket_trainer=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from_env()?;
    tracing::info!(seed = ?config.seed, "Pocket Trainer starting...");

    let mut session = Session::new(config, StdTerminal::new())?;
    let reports = session.run()?;

    tracing::info!(seed = session.seed(), players = reports.len(), "session complete");
    Ok(())
}
