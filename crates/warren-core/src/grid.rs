//! Binary occupancy grids.
//!
//! A [`Grid`] is a rectangular matrix of [`Tile`]s, each either open or
//! blocked, fixed for the lifetime of the grid. Grids can be built from
//! typed rows or parsed from the text form used throughout the demos and
//! tests: `-` for open, `#` for blocked, one line per row.

use std::fmt;

use crate::geom::Cell;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// Occupancy state of one grid cell. Movement is only permitted through
/// open tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Open,
    Blocked,
}

impl Tile {
    /// Whether the tile can be moved through.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }

    /// The character form of the tile (`-` open, `#` blocked).
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Tile::Open => '-',
            Tile::Blocked => '#',
        }
    }

    /// Parse the character form back into a tile.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '-' => Some(Tile::Open),
            '#' => Some(Tile::Blocked),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An immutable rectangular occupancy map.
///
/// Construction validates that the grid is non-empty and that all rows
/// share one column count; every later query is side-effect free, so a
/// grid may be shared freely across solver instances and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Build a grid from typed rows.
    ///
    /// Fails if there are no rows, the first row is empty, or any row has
    /// a different length from the first.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let mut tiles = Vec::with_capacity(rows.len() * cols);
        for (row, r) in rows.iter().enumerate() {
            if r.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
            tiles.extend_from_slice(r);
        }
        Ok(Self {
            tiles,
            rows: rows.len() as i32,
            cols: cols as i32,
        })
    }

    /// Parse a grid from its text form.
    ///
    /// One line per row, `-` for open and `#` for blocked. Leading and
    /// trailing whitespace around the whole string is trimmed; every line
    /// must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }
        let mut tiles = Vec::new();
        let mut rows: i32 = 0;
        let mut cols: i32 = -1;
        for (row, line) in s.lines().enumerate() {
            let mut width: i32 = 0;
            for (col, ch) in line.chars().enumerate() {
                let Some(tile) = Tile::from_glyph(ch) else {
                    return Err(GridError::UnknownSymbol {
                        ch,
                        cell: Cell::new(row as i32, col as i32),
                    });
                };
                tiles.push(tile);
                width += 1;
            }
            if cols < 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols as usize,
                    found: width as usize,
                });
            }
            rows += 1;
        }
        if cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self { tiles, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether the cell lies within the grid rectangle.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// The tile at a cell, or `None` if out of bounds.
    #[inline]
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(self.tiles[(cell.row * self.cols + cell.col) as usize])
    }

    /// Whether the cell is in bounds and open.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        matches!(self.tile(cell), Some(tile) if tile.is_open())
    }
}

impl fmt::Display for Grid {
    /// Renders the text form; round-trips with [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                write!(f, "{}", self.tiles[(row * self.cols + col) as usize].glyph())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when constructing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input had no rows, or rows of zero width.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither `-` nor `#` was found.
    UnknownSymbol { ch: char, cell: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty input"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::UnknownSymbol { ch, cell } => {
                write!(f, "grid: unknown symbol \u{201c}{ch}\u{201d} at {cell}")
            }
        }
    }
}

impl std::error::Error for GridError {}
