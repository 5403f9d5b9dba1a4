use std::{
    fs::{read_to_string, File},
    io::{BufReader, BufWriter},
    panic,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::LevelFilter::Info;
use simple_logger::SimpleLogger;

use maze::{Config, MazeGrid, PartialConfig};

pub fn init_logger() -> anyhow::Result<()> {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(Info)
        .env()
        .init()
        .context("Failed to init logger")
}

/// Load the config file, if any, and apply the command line overrides
pub fn load_config(path: Option<&Path>, overrides: PartialConfig) -> anyhow::Result<Config> {
    let config: PartialConfig = path
        .map(|path| {
            read_to_string(path)
                .with_context(|| format!("Cannot read config file {}", path.display()))
                .and_then(|s| toml::from_str(&s).context("Cannot parse config file"))
        })
        .transpose()?
        .unwrap_or_default();
    Ok(config.merge(overrides).or_defaults())
}

pub fn load(path: &Path) -> anyhow::Result<MazeGrid> {
    let file =
        File::open(path).with_context(|| format!("Cannot open maze file {}", path.display()))?;
    MazeGrid::try_read(BufReader::new(file))
        .with_context(|| format!("Cannot parse maze file {}", path.display()))
}

pub fn save(maze: &MazeGrid, path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Cannot create maze file {}", path.display()))?;
    maze.write(BufWriter::new(file))
        .with_context(|| format!("Cannot write maze file {}", path.display()))
}

/// Path of the `idx`-th of many outputs: `maze.txt` becomes `maze_3.txt`
pub fn numbered(path: &Path, idx: usize) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{idx}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{idx}"),
    };
    path.with_file_name(name)
}

/// Generate `count` mazes in parallel
///
/// The `idx`-th maze uses the config seed plus `idx`, so that each one can be
/// regenerated alone.
pub async fn generate_many(config: Config, count: usize) -> Vec<MazeGrid> {
    let seed = config.seed.unwrap_or_else(|| {
        let seed = rand::random();
        log::info!("Using random seed {seed}");
        seed
    });
    let mut tasks = Vec::with_capacity(count);
    for idx in 0..count {
        let config = Config {
            seed: Some(seed.wrapping_add(idx as u64)),
            ..config
        };
        tasks.push(tokio::task::spawn_blocking(move || {
            log::debug!("Generating maze {idx}");
            config.generate()
        }));
    }
    let mut mazes = Vec::with_capacity(count);
    for task in tasks {
        match task.await {
            Ok(maze) => mazes.push(maze),
            Err(err) => panic::resume_unwind(err.into_panic()),
        }
    }
    mazes
}
