//! Eller's algorithm
//!
//! The maze is built one row at a time, tracking for each cell of the current
//! row the set of cells it is already connected to. Only the current row is
//! kept in memory.

use rand::Rng;

use crate::{MazeGrid, Walls};

/// Label of a group of connected cells
type SetId = u64;

/// Label of the cells that are not connected to the row above
const UNASSIGNED: SetId = 0;

/// Generate a perfect maze of the given size
///
/// Non positive sizes give the empty maze.
/// ```
/// use maze::generate;
/// use rand::SeedableRng;
/// use rand_wyrand::WyRand;
///
/// let maze = generate(4, 6, &mut WyRand::seed_from_u64(42));
/// assert_eq!(maze.size(), [4, 6]);
/// assert!(maze.is_perfect());
///
/// assert!(generate(-3, 6, &mut WyRand::seed_from_u64(42)).is_empty());
/// ```
pub fn generate<R>(rows: i64, cols: i64, rng: &mut R) -> MazeGrid
where
    R: Rng + ?Sized,
{
    let (Ok(rows @ 1..), Ok(cols @ 1..)) = (usize::try_from(rows), usize::try_from(cols)) else {
        log::debug!("Invalid maze size {rows}x{cols}, returning the empty maze");
        return MazeGrid::empty();
    };
    let Some(cells) = rows.checked_mul(cols) else {
        log::warn!("Maze size {rows}x{cols} overflows, returning the empty maze");
        return MazeGrid::empty();
    };
    log::debug!("Generating a {rows}x{cols} maze");

    let mut row = Row::new(cols);
    let mut walls = Vec::with_capacity(cells);
    for r in 0..rows {
        row.assign_sets();
        row.right_walls(rng);
        if r + 1 < rows {
            row.down_walls(rng);
            log::trace!("Row {r}: sets {:?}", row.sets);
            walls.extend_from_slice(&row.walls);
            row.advance();
        } else {
            row.close();
            log::trace!("Row {r}: closed");
            walls.extend_from_slice(&row.walls);
        }
    }

    MazeGrid::from_walls(rows, cols, walls.into_boxed_slice())
}

/// The row being built
#[derive(Debug, Clone)]
struct Row {
    /// Set of each cell
    sets: Box<[SetId]>,
    /// Walls of each cell
    walls: Box<[Walls]>,
    /// Last set id given out
    last_set: SetId,
}

impl Row {
    fn new(cols: usize) -> Self {
        debug_assert!(cols > 0);
        Self {
            sets: vec![UNASSIGNED; cols].into_boxed_slice(),
            walls: vec![Walls::empty(); cols].into_boxed_slice(),
            last_set: UNASSIGNED,
        }
    }

    /// Give each new cell a set of its own
    fn assign_sets(&mut self) {
        for set in self.sets.iter_mut().filter(|s| **s == UNASSIGNED) {
            self.last_set += 1;
            *set = self.last_set;
        }
    }

    /// Move all the cells of `from` into `into`
    fn merge(&mut self, into: SetId, from: SetId) {
        for set in self.sets.iter_mut().filter(|s| **s == from) {
            *set = into;
        }
    }

    /// Randomly join neighbouring cells, never inside the same set
    fn right_walls<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let last = self.walls.len() - 1;
        for i in 0..last {
            if rng.gen::<bool>() || self.sets[i] == self.sets[i + 1] {
                self.walls[i] |= Walls::Right;
            } else {
                self.merge(self.sets[i], self.sets[i + 1]);
            }
        }
        self.walls[last] |= Walls::Right;
    }

    /// Cells of `set` still open to the row below
    fn open_cells(&self, set: SetId) -> usize {
        self.sets
            .iter()
            .zip(self.walls.iter())
            .filter(|(s, w)| **s == set && !w.contains(Walls::Down))
            .count()
    }

    /// Randomly close cells downward, leaving each set at least one opening
    fn down_walls<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for i in 0..self.walls.len() {
            // one bit is drawn even when the wall cannot be placed
            if rng.gen::<bool>() && self.open_cells(self.sets[i]) > 1 {
                self.walls[i] |= Walls::Down;
            }
        }
    }

    /// Turn this row into the next one
    ///
    /// Cells under a wall lose their set, the others stay connected to the
    /// cell above. All walls are cleared.
    fn advance(&mut self) {
        for (set, walls) in self.sets.iter_mut().zip(self.walls.iter_mut()) {
            if walls.contains(Walls::Down) {
                *set = UNASSIGNED;
            }
            *walls = Walls::empty();
        }
    }

    /// Finish the last row: join every pair of different sets and close the border
    fn close(&mut self) {
        let last = self.walls.len() - 1;
        for i in 0..last {
            if self.sets[i] != self.sets[i + 1] {
                self.walls[i].remove(Walls::Right);
                self.merge(self.sets[i], self.sets[i + 1]);
            }
        }
        for walls in self.walls.iter_mut() {
            *walls |= Walls::Down;
        }
        self.walls[last] |= Walls::Right;
    }
}
