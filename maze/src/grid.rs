use std::{collections::BTreeSet, fmt::Display, ops::Index};

use once_cell::sync::OnceCell;

use crate::{solver::Graph, Walls};

/// A rectangular maze
///
/// Cells are addressed as `[row, col]`. Each cell stores its right and bottom
/// walls; the passage graph is derived from them on the first query and kept
/// until the walls change.
#[derive(Debug, Clone, Default)]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    /// Walls of the cells, row-major
    walls: Box<[Walls]>,
    /// Memoized adjacency list
    graph: OnceCell<Graph>,
}

impl MazeGrid {
    /// The empty maze, `0x0`
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A maze with no walls at all
    ///
    /// If any of the sizes is zero the empty maze is returned.
    /// ```
    /// use maze::MazeGrid;
    ///
    /// assert_eq!(MazeGrid::new(3, 4).size(), [3, 4]);
    /// assert_eq!(MazeGrid::new(0, 4).size(), [0, 0]);
    /// ```
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self::from_walls(rows, cols, vec![Walls::empty(); rows * cols].into_boxed_slice())
    }

    /// Wrap an already filled wall matrix
    pub(crate) fn from_walls(rows: usize, cols: usize, walls: Box<[Walls]>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(walls.len(), rows * cols);
        Self {
            rows,
            cols,
            walls,
            graph: OnceCell::new(),
        }
    }

    /// Size of the maze, as `[rows, cols]`
    #[inline]
    #[must_use]
    pub const fn size(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Walls of all the cells, row-major
    #[inline]
    #[must_use]
    pub fn walls(&self) -> &[Walls] {
        &self.walls
    }

    /// Walls of each row of the maze
    pub fn lines(&self) -> impl Iterator<Item = &[Walls]> + '_ {
        // `chunks_exact` rejects 0, and the empty maze has no walls anyway
        self.walls.chunks_exact(self.cols.max(1))
    }

    /// Owned copy of the wall matrix
    #[must_use]
    pub fn walls_snapshot(&self) -> Vec<Vec<Walls>> {
        self.lines().map(<[Walls]>::to_vec).collect()
    }

    /// Walls of a cell, if inside the maze
    #[inline]
    #[must_use]
    pub fn get(&self, [row, col]: [usize; 2]) -> Option<Walls> {
        if row < self.rows && col < self.cols {
            Some(self.walls[self.cell_id([row, col])])
        } else {
            None
        }
    }

    /// Replace the walls of a cell, dropping the cached passage graph
    pub(crate) fn set_walls(&mut self, pos: [usize; 2], walls: Walls) {
        let id = self.cell_id(pos);
        self.walls[id] = walls;
        self.graph.take();
    }

    /// Linear id of a cell, which must be inside the maze
    #[inline]
    #[must_use]
    pub(crate) const fn cell_id(&self, [row, col]: [usize; 2]) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Position of the cell with a given linear id, which must be inside the maze
    #[inline]
    #[must_use]
    pub(crate) const fn cell_pos(&self, id: usize) -> [usize; 2] {
        debug_assert!(id < self.rows * self.cols);
        [id / self.cols, id % self.cols]
    }

    /// Convert a signed position to a cell of the maze, if it's inside
    /// ```
    /// use maze::MazeGrid;
    ///
    /// let maze = MazeGrid::new(5, 5);
    /// assert_eq!(maze.checked_pos([4, 0]), Some([4, 0]));
    /// assert_eq!(maze.checked_pos([-1, 3]), None);
    /// assert_eq!(maze.checked_pos([15, 0]), None);
    /// ```
    #[must_use]
    pub fn checked_pos(&self, [row, col]: [i64; 2]) -> Option<[usize; 2]> {
        let row = usize::try_from(row).ok().filter(|r| *r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|c| *c < self.cols)?;
        Some([row, col])
    }

    pub(crate) fn graph(&self) -> &Graph {
        self.graph.get_or_init(|| {
            log::debug!("Building passage graph for a {}x{} maze", self.rows, self.cols);
            Graph::build(self)
        })
    }

    /// Draw the maze, marking the cells on `path`
    /// ```
    /// use maze::MazeGrid;
    ///
    /// let maze = MazeGrid::new(1, 2);
    /// assert_eq!(
    ///     maze.display_path(&[[0, 1]]).to_string(),
    ///     "+--+--+\n|    * \n+  +  +\n"
    /// );
    /// ```
    #[must_use]
    pub fn display_path(&self, path: &[[usize; 2]]) -> MazeDisplay<'_> {
        MazeDisplay {
            maze: self,
            path: path.iter().copied().collect(),
        }
    }
}

impl PartialEq for MazeGrid {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.walls == other.walls
    }
}
impl Eq for MazeGrid {}

impl Index<[usize; 2]> for MazeGrid {
    type Output = Walls;

    fn index(&self, pos: [usize; 2]) -> &Self::Output {
        &self.walls[self.cell_id(pos)]
    }
}

impl Display for MazeGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display_path(&[]).fmt(f)
    }
}

/// Text drawing of a maze, with an optional path on it
pub struct MazeDisplay<'m> {
    maze: &'m MazeGrid,
    path: BTreeSet<[usize; 2]>,
}

impl Display for MazeDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.maze.is_empty() {
            return Ok(());
        }
        // top border
        write!(f, "+")?;
        for _ in 0..self.maze.cols {
            write!(f, "--+")?;
        }
        writeln!(f)?;
        for (row, line) in self.maze.lines().enumerate() {
            write!(f, "|")?;
            for (col, walls) in line.iter().enumerate() {
                let floor = if self.path.contains(&[row, col]) {
                    " *"
                } else {
                    "  "
                };
                let side = if walls.contains(Walls::Right) { '|' } else { ' ' };
                write!(f, "{floor}{side}")?;
            }
            writeln!(f)?;
            write!(f, "+")?;
            for walls in line {
                let bottom = if walls.contains(Walls::Down) { "--" } else { "  " };
                write!(f, "{bottom}+")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
