use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use humansize::{format_size, BINARY};

use maze_tools::{init_logger, load};

#[derive(Parser)]
#[command(version)]
struct Args {
    /// File to show info for
    infile: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let Args { infile } = Args::parse();
    init_logger()?;
    let file_size = fs::metadata(&infile)
        .context("Cannot read file metadata")?
        .len();
    let maze = load(&infile)?;
    let [rows, cols] = maze.size();

    println!("File: {}", infile.to_string_lossy());
    println!("File size: {}", format_size(file_size, BINARY));
    println!("Size: {rows}x{cols}");
    println!("Passages: {}", maze.edge_count());
    println!("Connected: {}", maze.is_connected());
    println!("Perfect: {}", maze.is_perfect());

    Ok(())
}
