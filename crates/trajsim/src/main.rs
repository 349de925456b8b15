//! trajsim command-line front end.
//!
//! With no subcommand, generates one multi-agent trajectory and prints its
//! collision count. Subcommands:
//!
//! - `dataset` -- Generate a seeded batch of samples and save it as JSON
//! - `score`   -- Count collisions in a saved dataset

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use trajsim::prelude::*;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Multi-agent trajectory simulator.
#[derive(Parser)]
#[command(name = "trajsim", version, about)]
struct Cli {
    /// Path to a JSON simulation config (uses defaults if not provided).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of agents in the single-trajectory run.
    #[arg(short = 'n', long = "n_agents", default_value_t = 10)]
    n_agents: usize,

    /// Number of recorded ticks in the single-trajectory run.
    #[arg(short = 'l', long = "traj_len", default_value_t = 100)]
    traj_len: usize,

    /// RNG seed for the single-trajectory run (random if not provided).
    #[arg(long)]
    seed: Option<u64>,

    /// Save the single-trajectory sample as JSON.
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a seeded batch of samples.
    Dataset {
        /// Seed for the whole batch.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Number of samples.
        #[arg(long = "n_trajs", default_value_t = 1000)]
        n_trajs: usize,

        /// Agents per sample.
        #[arg(long = "n_agents", default_value_t = 10)]
        n_agents: usize,

        /// Recorded ticks per sample.
        #[arg(long = "traj_len", default_value_t = 100)]
        traj_len: usize,

        /// Path to save the dataset.
        #[arg(long, default_value = "data/trajectories.json")]
        output: PathBuf,
    },

    /// Count collisions in a saved dataset.
    Score {
        /// Path to a dataset produced by `dataset`.
        #[arg(default_value = "data/trajectories.json")]
        path: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Entrypoint
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // Initialise tracing (reads RUST_LOG env var, defaults to info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    config.validate().context("Invalid simulation config")?;

    match cli.command {
        None => cmd_trajectory(&config, cli.n_agents, cli.traj_len, cli.seed, cli.output.as_deref()),
        Some(Commands::Dataset {
            seed,
            n_trajs,
            n_agents,
            traj_len,
            output,
        }) => cmd_dataset(&config, seed, n_trajs, n_agents, traj_len, &output),
        Some(Commands::Score { path }) => cmd_score(&path),
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_trajectory(
    config: &SimConfig,
    n_agents: usize,
    traj_len: usize,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, n_agents, traj_len, "Generating trajectory");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (trajectories, bodies) = generate_trajectory(config, n_agents, traj_len, &mut rng)
        .context("Trajectory generation failed")?;
    let radii: Vec<f64> = bodies.iter().map(|b| b.radius).collect();

    println!("# collisions: {}", count_collisions(&trajectories, &radii)?);

    if let Some(path) = output {
        let sample = Sample::new(trajectories, radii)?;
        write_json(path, &sample)?;
        tracing::info!(path = %path.display(), "Saved trajectory");
    }
    Ok(())
}

fn cmd_dataset(
    config: &SimConfig,
    seed: u64,
    n_trajs: usize,
    n_agents: usize,
    traj_len: usize,
    output: &Path,
) -> Result<()> {
    let samples = generate_with(config, seed, n_trajs, n_agents, traj_len)
        .context("Dataset generation failed")?;

    write_json(output, &samples)?;
    tracing::info!(path = %output.display(), count = samples.len(), "Saved dataset");
    Ok(())
}

fn cmd_score(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let samples: Vec<Sample> =
        serde_json::from_str(&text).context("Failed to parse dataset")?;

    println!("Dataset: {}", path.display());
    println!("  Samples: {}", samples.len());

    let mut total = 0u64;
    for (i, sample) in samples.iter().enumerate() {
        let hits = count_collisions(&sample.trajectories, &sample.radii)
            .with_context(|| format!("Sample {i} is malformed"))?;
        println!(
            "  [{i}] agents={} ticks={} collisions={hits}",
            sample.trajectories.agent_count(),
            sample.trajectories.tick_count()
        );
        total += hits;
    }
    println!("# collisions: {total}");
    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string(value)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
