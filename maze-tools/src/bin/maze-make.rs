use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use maze::PartialConfig;
use maze_tools::{generate_many, init_logger, load_config, numbered, save};

/// Generate mazes and save them to file
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Configuration file for the maze
    #[clap(short)]
    config: Option<PathBuf>,
    /// Overrides of the configuration
    #[clap(flatten)]
    overrides: PartialConfig,
    /// Number of mazes to generate
    #[clap(long, short = 'n', default_value = "1")]
    count: usize,
    outfile: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Args {
        config,
        overrides,
        count,
        outfile,
    } = Args::parse();
    init_logger()?;
    let config = load_config(config.as_deref(), overrides).context("While loading configs")?;

    let mazes = generate_many(config, count).await;
    if let [maze] = &mazes[..] {
        return save(maze, &outfile);
    }
    for (idx, maze) in mazes.iter().enumerate() {
        let path = numbered(&outfile, idx);
        save(maze, &path)?;
        log::info!("Saved {}", path.display());
    }
    Ok(())
}
