use std::fmt;

use super::player::Player;
use crate::error::BoardError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Number of same-owner cells in a line needed to win.
pub const CONNECT: usize = 4;

/// Step vectors (row, col) for the four line directions:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Grid of cells stored row-major.
/// Row 0 is the top, row `height - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimension { width, height });
        }

        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Create an empty 7x6 board
    pub fn standard() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.height || col >= self.width {
            return Err(BoardError::CellOutOfRange { row, column: col });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Iterate over the rows, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Bottommost empty row in a column, or `None` if the column is full
    pub fn lowest_empty_row(&self, col: usize) -> Result<Option<usize>, BoardError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[self.index(row, col)].is_empty()))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> Result<bool, BoardError> {
        self.check_column(col)?;
        // Gravity keeps the top cell the last one to fill.
        Ok(!self.cells[self.index(0, col)].is_empty())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Put a token at (row, col). The row must come from `lowest_empty_row`.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert_eq!(
            self.lowest_empty_row(col).ok().flatten(),
            Some(row),
            "placement at ({row}, {col}) would break gravity"
        );
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Occupied(player);
    }

    /// Find a line of `CONNECT` cells owned by `player` passing through
    /// (row, col). Returns the line's cells ordered along its direction.
    pub fn line_through(
        &self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Option<[(usize, usize); CONNECT]> {
        if self.cell_at(row, col).ok()?.owner() != Some(player) {
            return None;
        }

        for (dr, dc) in DIRECTIONS {
            let back = self.run_length((row, col), -dr, -dc, player);
            let forward = self.run_length((row, col), dr, dc, player);
            if back + forward + 1 < CONNECT {
                continue;
            }

            // Start far enough back that the window still covers (row, col).
            let mut start = (row, col);
            for _ in 0..back.min(CONNECT - 1) {
                start = self.step(start, -dr, -dc)?;
            }
            let mut line = [start; CONNECT];
            for i in 1..CONNECT {
                line[i] = self.step(line[i - 1], dr, dc)?;
            }
            return Some(line);
        }

        None
    }

    /// Check if the token at (row, col) completes four in a row
    pub fn check_win(&self, row: usize, col: usize, player: Player) -> bool {
        self.line_through(row, col, player).is_some()
    }

    /// Count consecutive cells owned by `player` stepping away from `from`,
    /// not counting `from` itself. Stops after `CONNECT - 1`.
    fn run_length(&self, from: (usize, usize), dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let mut pos = from;
        while count < CONNECT - 1 {
            match self.step(pos, dr, dc) {
                Some(next) if self.owner_at(next) == Some(player) => {
                    pos = next;
                    count += 1;
                }
                _ => break,
            }
        }
        count
    }

    fn owner_at(&self, (row, col): (usize, usize)) -> Option<Player> {
        self.cells[self.index(row, col)].owner()
    }

    fn step(&self, (row, col): (usize, usize), dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.height && c < self.width).then_some((r, c))
    }

    fn check_column(&self, col: usize) -> Result<(), BoardError> {
        if col >= self.width {
            return Err(BoardError::ColumnOutOfRange {
                column: col,
                width: self.width,
            });
        }
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let symbol = match cell.owner() {
                    None => '.',
                    Some(player) => player.symbol(),
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
