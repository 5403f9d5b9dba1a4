use std::{
    fs::{read_to_string, File},
    io::BufReader,
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use simple_logger::SimpleLogger;

use maze::{MazeGrid, PartialConfig, Walls};

#[derive(Debug, Parser)]
struct Args {
    /// Configuration file for the maze
    #[clap(short)]
    config: Option<PathBuf>,
    /// Overrides of the configuration
    #[clap(flatten)]
    overrides: PartialConfig,
    /// Maze file to render, instead of generating one
    #[clap(short, long)]
    input: Option<PathBuf>,
    /// Draw the path between the top-left and bottom-right corners
    #[clap(short, long)]
    solve: bool,
    /// Output file
    #[clap(short, long)]
    output: PathBuf,
}

const TILE_SIZE: u32 = 10;
const WALL_SIZE: u32 = 1;
const WALL_COLOR: [u8; 3] = [0, 0, 0];
const FLOOR_COLOR: [u8; 3] = [255, 255, 255];
const PATH_COLOR: [u8; 3] = [220, 60, 60];

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .env()
        .init()
        .context("While initializing logging")?;

    let Args {
        config,
        overrides,
        input,
        solve,
        output,
    } = Args::parse();

    let maze = match input {
        Some(path) => {
            let file = File::open(&path).context("Cannot open maze file")?;
            MazeGrid::try_read(BufReader::new(file)).context("Cannot parse maze file")?
        }
        None => {
            let config: PartialConfig = config
                .map(|path| {
                    read_to_string(path)
                        .context("Cannot read config file")
                        .and_then(|s| toml::from_str(&s).context("Cannot parse config file"))
                })
                .transpose()
                .context("While loading configs")?
                .unwrap_or_default();
            config.merge(overrides).or_defaults().generate()
        }
    };
    anyhow::ensure!(!maze.is_empty(), "Nothing to draw: the maze is empty");

    let [rows, cols] = maze.size();
    let path = if solve {
        maze.shortest_path([0, 0], [rows as i64 - 1, cols as i64 - 1])
    } else {
        vec![]
    };

    let mut image = image::RgbImage::from_pixel(
        TILE_SIZE * cols as u32 + WALL_SIZE,
        TILE_SIZE * rows as u32 + WALL_SIZE,
        image::Rgb(FLOOR_COLOR),
    );
    // path
    for [row, col] in path {
        let [top, left] = [row, col].map(|x| x as u32 * TILE_SIZE);
        for x in left + WALL_SIZE..left + TILE_SIZE {
            for y in top + WALL_SIZE..top + TILE_SIZE {
                image[(x, y)].0 = PATH_COLOR;
            }
        }
    }
    // top and left borders
    for x in 0..image.width() {
        for y in 0..WALL_SIZE {
            image[(x, y)].0 = WALL_COLOR;
        }
    }
    for y in 0..image.height() {
        for x in 0..WALL_SIZE {
            image[(x, y)].0 = WALL_COLOR;
        }
    }
    // walls of each cell
    for (row, line) in maze.lines().enumerate() {
        for (col, walls) in line.iter().enumerate() {
            let [top, left] = [row, col].map(|x| x as u32 * TILE_SIZE);
            // right
            if walls.contains(Walls::Right) {
                for x in left + TILE_SIZE..left + TILE_SIZE + WALL_SIZE {
                    for y in top..top + TILE_SIZE + WALL_SIZE {
                        image[(x, y)].0 = WALL_COLOR;
                    }
                }
            }
            // bottom
            if walls.contains(Walls::Down) {
                for x in left..left + TILE_SIZE + WALL_SIZE {
                    for y in top + TILE_SIZE..top + TILE_SIZE + WALL_SIZE {
                        image[(x, y)].0 = WALL_COLOR;
                    }
                }
            }
        }
    }
    image.save(output).context("While saving the image")?;
    Ok(())
}
