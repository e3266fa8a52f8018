use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use mainstage::assign;
use mainstage::generate::{random_shows, RandomShowsConfig};
use mainstage::io::{load_shows, load_stage_names, render_schedule, write_schedule};
use mainstage::naming::StageNames;

/// Assign festival shows to the minimum number of stages.
#[derive(Parser)]
#[command(name = "mainstage", version)]
#[command(about = "Assign festival shows to the minimum number of stages", long_about = None)]
struct Cli {
    /// JSON file with shows as [name, start, end] triples or objects
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate N random shows instead of loading a file
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// RNG seed for --random and generated stage names
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with a custom stage-name list
    #[arg(long)]
    stage_names: Option<PathBuf>,

    /// Write the resulting schedule as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let shows = match (cli.random, cli.input) {
        (Some(count), _) => random_shows(&RandomShowsConfig::with_count(count), &mut rng),
        (None, Some(path)) => {
            load_shows(&path).with_context(|| format!("loading shows from {}", path.display()))?
        }
        (None, None) => anyhow::bail!("either --input or --random is required"),
    };

    let schedule = assign(&shows).context("assigning shows to stages")?;

    let names = match cli.stage_names {
        Some(path) => load_stage_names(&path)
            .with_context(|| format!("loading stage names from {}", path.display()))?,
        None => StageNames::generate(schedule.stage_count(), &mut rng),
    };

    print!("{}", render_schedule(&schedule, &names));

    if let Some(path) = cli.output {
        write_schedule(&path, &schedule, &names)
            .with_context(|| format!("writing schedule to {}", path.display()))?;
    }

    Ok(())
}
