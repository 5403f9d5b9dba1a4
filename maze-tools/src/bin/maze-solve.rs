use std::path::PathBuf;

use clap::Parser;

use maze_tools::{init_logger, load};

/// Find the shortest path between two cells of a maze
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Maze file
    infile: PathBuf,
    /// Row of the starting cell
    #[clap(short = 'r', long, default_value = "0", allow_negative_numbers = true)]
    start_row: i64,
    /// Column of the starting cell
    #[clap(short = 'c', long, default_value = "0", allow_negative_numbers = true)]
    start_col: i64,
    /// Row of the arrival cell [default: last row]
    #[clap(short = 'R', long, allow_negative_numbers = true)]
    finish_row: Option<i64>,
    /// Column of the arrival cell [default: last column]
    #[clap(short = 'C', long, allow_negative_numbers = true)]
    finish_col: Option<i64>,
    /// Print only the cells of the path
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let Args {
        infile,
        start_row,
        start_col,
        finish_row,
        finish_col,
        quiet,
    } = Args::parse();
    init_logger()?;

    let maze = load(&infile)?;
    let [rows, cols] = maze.size().map(|x| x as i64);
    let start = [start_row, start_col];
    let finish = [finish_row.unwrap_or(rows - 1), finish_col.unwrap_or(cols - 1)];

    let path = maze.shortest_path(start, finish);
    anyhow::ensure!(
        !path.is_empty(),
        "No path from {start:?} to {finish:?} in a {rows}x{cols} maze"
    );
    log::info!("Path of {} cells", path.len());

    if !quiet {
        print!("{}", maze.display_path(&path));
    }
    for [row, col] in path {
        println!("{row} {col}");
    }
    Ok(())
}
