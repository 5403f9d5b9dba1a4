//! Perfect maze generation, storage and solving
//!
//! Mazes are generated row by row with Eller's algorithm, stored in a simple
//! text format, and solved with a breadth first search on their passages.
//! ```
//! use maze::{generate, MazeGrid};
//! use rand::SeedableRng;
//! use rand_wyrand::WyRand;
//!
//! let maze = generate(5, 5, &mut WyRand::seed_from_u64(0));
//! let path = maze.shortest_path([0, 0], [4, 4]);
//! assert_eq!(path.first(), Some(&[0, 0]));
//! assert_eq!(path.last(), Some(&[4, 4]));
//!
//! let mut file = Vec::new();
//! maze.write(&mut file).unwrap();
//! assert_eq!(MazeGrid::read(&*file), maze);
//! ```

mod walls;
pub use walls::Walls;

mod grid;
pub use grid::{MazeDisplay, MazeGrid};

mod solver;

pub mod eller;
pub use eller::generate;

mod codec;
pub use codec::DecodeError;

pub mod config;
pub use config::{Config, PartialConfig};
