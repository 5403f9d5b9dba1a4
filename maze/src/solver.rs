use std::{collections::VecDeque, iter::successors};

use crate::{MazeGrid, Walls};

/// Passages between the cells of a maze, as an adjacency list over cell ids
#[derive(Debug, Clone)]
pub(crate) struct Graph {
    neighbours: Box<[Box<[usize]>]>,
}

impl Graph {
    /// Read the passages from the walls
    ///
    /// Neighbours of each cell are listed left, right, up, down. Path search
    /// explores them in this order.
    pub(crate) fn build(maze: &MazeGrid) -> Self {
        let [rows, cols] = maze.size();
        let mut neighbours = Vec::with_capacity(maze.len());
        for row in 0..rows {
            for col in 0..cols {
                let mut cell = Vec::with_capacity(4);
                if col != 0 && !maze[[row, col - 1]].contains(Walls::Right) {
                    cell.push(maze.cell_id([row, col - 1]));
                }
                if col != cols - 1 && !maze[[row, col]].contains(Walls::Right) {
                    cell.push(maze.cell_id([row, col + 1]));
                }
                if row != 0 && !maze[[row - 1, col]].contains(Walls::Down) {
                    cell.push(maze.cell_id([row - 1, col]));
                }
                if row != rows - 1 && !maze[[row, col]].contains(Walls::Down) {
                    cell.push(maze.cell_id([row + 1, col]));
                }
                neighbours.push(cell.into_boxed_slice());
            }
        }
        Self {
            neighbours: neighbours.into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn neighbours(&self, id: usize) -> &[usize] {
        &self.neighbours[id]
    }

    /// Number of undirected passages
    pub(crate) fn edge_count(&self) -> usize {
        // every passage is listed from both sides
        self.neighbours.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Breadth first search from `start`, stopping as soon as `finish` is reached
    ///
    /// Returns the parent of every visited cell (`start` is its own parent).
    fn bfs(&self, start: usize, finish: Option<usize>) -> Box<[Option<usize>]> {
        let mut parents = vec![None; self.neighbours.len()].into_boxed_slice();
        let mut frontier = VecDeque::from([start]);
        parents[start] = Some(start);
        while let Some(current) = frontier.pop_front() {
            if Some(current) == finish {
                break;
            }
            for &n in self.neighbours(current) {
                if parents[n].is_none() {
                    parents[n] = Some(current);
                    frontier.push_back(n);
                }
            }
        }
        parents
    }
}

impl MazeGrid {
    /// Shortest path between two cells, both ends included
    ///
    /// The path is empty if the maze is empty, if any of the cells is outside
    /// of it, or if the two cells are not connected.
    /// ```
    /// use maze::MazeGrid;
    ///
    /// let maze = MazeGrid::new(2, 2);
    /// assert_eq!(maze.shortest_path([0, 0], [0, 0]), vec![[0, 0]]);
    /// assert_eq!(maze.shortest_path([0, 0], [0, 1]), vec![[0, 0], [0, 1]]);
    /// assert!(maze.shortest_path([0, 0], [2, 0]).is_empty());
    /// ```
    #[must_use]
    pub fn shortest_path(&self, start: [i64; 2], finish: [i64; 2]) -> Vec<[usize; 2]> {
        if self.is_empty() {
            return vec![];
        }
        let (Some(start), Some(finish)) = (self.checked_pos(start), self.checked_pos(finish))
        else {
            log::trace!("Path query {start:?} -> {finish:?} outside of the maze");
            return vec![];
        };
        let [start, finish] = [start, finish].map(|p| self.cell_id(p));

        let parents = self.graph().bfs(start, Some(finish));
        if parents[finish].is_none() {
            log::debug!(
                "No path from {:?} to {:?}",
                self.cell_pos(start),
                self.cell_pos(finish)
            );
            return vec![];
        }
        let mut path: Vec<_> = successors(Some(finish), |&c| {
            // `start` is the only cell that is its own parent
            parents[c].filter(|&p| p != c)
        })
        .map(|id| self.cell_pos(id))
        .collect();
        path.reverse();
        path
    }

    /// Number of passages between cells
    #[must_use]
    pub fn edge_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.graph().edge_count()
    }

    /// Check if every cell can be reached from every other one
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.graph()
            .bfs(0, None)
            .iter()
            .all(|parent| parent.is_some())
    }

    /// Check if the passages form a spanning tree: one and only one path
    /// between any two cells
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.is_empty() && self.edge_count() == self.len() - 1 && self.is_connected()
    }
}
