//! Text format of a maze
//!
//! ```text
//! <rows> <cols>
//! <right walls, one row per line>
//!
//! <down walls, one row per line>
//! ```
//! Each wall is written as `0` or `1`. The empty maze is written as an empty file.

use std::io::{self, Read, Write};

use thiserror::Error;

use crate::{MazeGrid, Walls};

/// Reasons a maze file could not be read
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Cannot read the maze")]
    Io(#[from] io::Error),
    #[error("Missing {what}")]
    MissingToken { what: &'static str },
    #[error("Invalid number `{token}`")]
    InvalidToken { token: String },
    #[error("Invalid maze size {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },
}

/// Whitespace separated integers
///
/// Tokens are parsed one at a time, bytes after the last one asked for are
/// never looked at.
struct Tokens<I>(I);

impl<'b, I> Tokens<I>
where
    I: Iterator<Item = &'b [u8]>,
{
    fn next(&mut self, what: &'static str) -> Result<i64, DecodeError> {
        let token = self.0.next().ok_or(DecodeError::MissingToken { what })?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| DecodeError::InvalidToken {
                token: String::from_utf8_lossy(token).into_owned(),
            })
    }
}

impl MazeGrid {
    /// Read a maze, failing on any malformed input
    pub fn try_read(mut reader: impl Read) -> Result<Self, DecodeError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let mut tokens = Tokens(
            bytes
                .split(u8::is_ascii_whitespace)
                .filter(|token| !token.is_empty()),
        );

        let (rows, cols) = (tokens.next("rows")?, tokens.next("columns")?);
        let (Ok(rows @ 1..), Ok(cols @ 1..)) = (usize::try_from(rows), usize::try_from(cols)) else {
            return Err(DecodeError::InvalidDimensions { rows, cols });
        };
        let len = rows
            .checked_mul(cols)
            .ok_or(DecodeError::InvalidDimensions {
                rows: rows as _,
                cols: cols as _,
            })?;

        // not preallocated: the size is not trusted until the walls are there
        let mut right = Vec::new();
        for _ in 0..len {
            right.push(tokens.next("right wall")?);
        }
        let mut walls = Vec::with_capacity(len);
        for right in right {
            walls.push(Walls::from_planes(right, tokens.next("down wall")?));
        }

        Ok(Self::from_walls(rows, cols, walls.into_boxed_slice()))
    }

    /// Read a maze, getting the empty one on malformed input
    /// ```
    /// use maze::MazeGrid;
    ///
    /// assert!(MazeGrid::read("0 0".as_bytes()).is_empty());
    /// assert!(MazeGrid::read("2 2\n1 1".as_bytes()).is_empty());
    /// ```
    pub fn read(reader: impl Read) -> Self {
        match Self::try_read(reader) {
            Ok(maze) => maze,
            Err(err) => {
                log::warn!("Discarding malformed maze: {err}");
                Self::empty()
            }
        }
    }

    /// Write the maze
    ///
    /// Nothing is written for the empty maze.
    pub fn write(&self, mut writer: impl Write) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        let [rows, cols] = self.size();
        writeln!(writer, "{rows} {cols}")?;
        self.write_plane(&mut writer, Walls::right_plane)?;
        writeln!(writer)?;
        self.write_plane(&mut writer, Walls::down_plane)?;
        writer.flush()
    }

    fn write_plane(&self, writer: &mut impl Write, plane: fn(Walls) -> u8) -> io::Result<()> {
        for line in self.lines() {
            for (i, walls) in line.iter().enumerate() {
                if i > 0 {
                    write!(writer, " ")?;
                }
                write!(writer, "{}", plane(*walls))?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    mod decode {
        use crate::{codec::DecodeError, MazeGrid, Walls};

        #[test]
        fn two_by_three() {
            let maze = MazeGrid::try_read(
                "2 3\n\
                 0 0 1\n\
                 1 0 1\n\
                 \n\
                 1 0 0\n\
                 1 1 1\n"
                    .as_bytes(),
            )
            .unwrap();
            assert_eq!(maze.size(), [2, 3]);
            assert_eq!(
                maze.walls(),
                &[
                    Walls::Down,
                    Walls::empty(),
                    Walls::Right,
                    Walls::Both,
                    Walls::Down,
                    Walls::Both
                ]
            );
        }

        #[test]
        fn layout_is_free() {
            // only the tokens matter
            let a = MazeGrid::try_read("1 2 0 1 1 1".as_bytes()).unwrap();
            let b = MazeGrid::try_read("1 2\n0 1\n\n1 1\n".as_bytes()).unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn dimensions() {
            for text in ["0 0", "-1 3", "3 0", ""] {
                assert!(MazeGrid::read(text.as_bytes()).is_empty());
            }
            assert!(matches!(
                MazeGrid::try_read("0 5".as_bytes()),
                Err(DecodeError::InvalidDimensions { rows: 0, cols: 5 })
            ));
        }

        #[test]
        fn truncated() {
            assert!(matches!(
                MazeGrid::try_read("2 2\n0 1\n0 1\n\n1 1\n".as_bytes()),
                Err(DecodeError::MissingToken { what: "down wall" })
            ));
            assert!(matches!(
                MazeGrid::try_read("5 5".as_bytes()),
                Err(DecodeError::MissingToken { what: "right wall" })
            ));
            assert!(MazeGrid::read("2 2\n0 1".as_bytes()).is_empty());
        }

        #[test]
        fn garbage() {
            assert!(matches!(
                MazeGrid::try_read("2 x".as_bytes()),
                Err(DecodeError::InvalidToken { .. })
            ));
            assert!(MazeGrid::read("1 1\n1\n\nwall".as_bytes()).is_empty());
            assert!(MazeGrid::read(b"\xff\xfe1".as_slice()).is_empty());
            assert!(matches!(
                MazeGrid::try_read(b"1 1\n\xff\n\n1\n".as_slice()),
                Err(DecodeError::InvalidToken { .. })
            ));
        }

        #[test]
        fn trailing_bytes_are_ignored() {
            for tail in [
                b"\xff".as_slice(),
                b"\xfe\xff junk".as_slice(),
                b"7 7 7".as_slice(),
                b"\n\n".as_slice(),
            ] {
                let mut file = b"1 1\n1\n\n1\n".to_vec();
                file.extend_from_slice(tail);
                let maze = MazeGrid::try_read(&*file).unwrap();
                assert_eq!(maze.size(), [1, 1]);
                assert_eq!(maze[[0, 0]], Walls::Both);
            }
        }

        #[test]
        fn huge_size_without_walls() {
            assert!(MazeGrid::read("100000000 100000000\n0 1".as_bytes()).is_empty());
        }
    }

    mod encode {
        use crate::{MazeGrid, Walls};

        #[test]
        fn empty() {
            let mut out = Vec::new();
            MazeGrid::empty().write(&mut out).unwrap();
            assert!(out.is_empty());
        }

        #[test]
        fn planes() {
            let mut maze = MazeGrid::new(2, 2);
            maze.set_walls([0, 0], Walls::Down);
            maze.set_walls([0, 1], Walls::Right);
            maze.set_walls([1, 0], Walls::Down);
            maze.set_walls([1, 1], Walls::Both);
            let mut out = Vec::new();
            maze.write(&mut out).unwrap();
            assert_eq!(
                String::from_utf8(out).unwrap(),
                "2 2\n0 1\n0 1\n\n1 0\n1 1\n"
            );
        }

        #[test]
        fn stray_bits_are_masked() {
            let mut maze = MazeGrid::new(1, 1);
            maze.set_walls([0, 0], Walls::from_bits_retain(0b1111));
            let mut out = Vec::new();
            maze.write(&mut out).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), "1 1\n1\n\n1\n");
        }

        #[test]
        fn back_and_forth() {
            let mut maze = MazeGrid::new(3, 2);
            maze.set_walls([2, 1], Walls::Both);
            maze.set_walls([0, 0], Walls::Right);
            let mut out = Vec::new();
            maze.write(&mut out).unwrap();
            assert_eq!(MazeGrid::try_read(&*out).unwrap(), maze);
        }
    }
}
