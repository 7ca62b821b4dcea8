//! Automated playtester - plays whole sessions with random answers
//!
//! Useful for checking that every path through the game terminates and for
//! eyeballing how often battles are won and creatures caught.

use std::collections::BTreeMap;

use clap::Parser;
use pocket_trainer::battle::BattleResult;
use pocket_trainer::core::{GameConfig, Result};
use pocket_trainer::simulation::{PlayThroughReport, Session};
use pocket_trainer::ui::AutoPilot;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Headless playtester for Pocket Trainer
#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play full sessions with random answers and report outcomes")]
struct Args {
    /// Seed of the first run; later runs use seed + n
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of sessions to play
    #[arg(long, default_value_t = 1)]
    runs: u64,

    /// Print every report as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// One session's reports
#[derive(Serialize)]
struct RunOutput {
    seed: u64,
    reports: Vec<PlayThroughReport>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pocket_trainer=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut outputs = Vec::with_capacity(args.runs as usize);

    for run in 0..args.runs {
        let seed = args.seed.wrapping_add(run);
        let mut session = Session::new(GameConfig::instant(seed), AutoPilot::new(seed))?;
        let reports = session.run()?;
        tracing::debug!(seed, lines = session.console().terminal().lines, "run finished");
        outputs.push(RunOutput { seed, reports });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    print_summary(&outputs);
    Ok(())
}

fn print_summary(outputs: &[RunOutput]) {
    let mut results: BTreeMap<String, usize> = BTreeMap::new();
    let mut play_throughs = 0;
    let mut captures = 0;

    for output in outputs {
        for report in &output.reports {
            play_throughs += 1;
            let key = match report.result {
                BattleResult::Victory => "victory",
                BattleResult::Defeat => "defeat",
                BattleResult::GameOver => "game over",
                BattleResult::None => "no encounter",
            };
            *results.entry(key.to_string()).or_default() += 1;
            // Anything past the starter was caught in the woods
            captures += report.creatures.len().saturating_sub(1);
        }
    }

    println!("=== Pocket Trainer Autoplay ===");
    println!("Sessions: {}", outputs.len());
    println!("Play-throughs: {}", play_throughs);
    for (result, count) in &results {
        println!("  {:<13} {}", result, count);
    }
    println!("Creatures caught in the woods: {}", captures);
}
