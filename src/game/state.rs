use std::fmt;

use super::board::CONNECT;
use super::{Board, Player};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{player} wins!"),
            GameStatus::Tied => write!(f, "It's a tie!"),
        }
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Token placed, game continues with the other player.
    Placed {
        row: usize,
        column: usize,
        player: Player,
    },
    /// Token placed and completed four in a row for `player`.
    Won {
        player: Player,
        row: usize,
        column: usize,
    },
    /// Token placed into the last empty cell without a win.
    Tied {
        row: usize,
        column: usize,
        player: Player,
    },
}

impl MoveOutcome {
    /// Where the token landed
    pub fn position(&self) -> (usize, usize) {
        match *self {
            MoveOutcome::Placed { row, column, .. }
            | MoveOutcome::Won { row, column, .. }
            | MoveOutcome::Tied { row, column, .. } => (row, column),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    moves_played: usize,
    winning_line: Option<[(usize, usize); CONNECT]>,
}

impl GameState {
    /// Create a game on an empty board of the given size
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(width, height)?))
    }

    /// Create a game on the standard 7x6 board
    pub fn initial() -> Self {
        Self::with_board(Board::standard())
    }

    fn with_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::One, // Player 1 starts
            status: GameStatus::InProgress,
            moves_played: 0,
            winning_line: None,
        }
    }

    /// Player whose turn it is; after a win this is the winner
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of tokens placed so far
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Cells of the completed line, once the game is won
    pub fn winning_line(&self) -> Option<[(usize, usize); CONNECT]> {
        self.winning_line
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| matches!(self.board.is_column_full(col), Ok(false)))
            .collect()
    }

    /// Drop the current player's token into `column`.
    ///
    /// Either the move is fully applied or the game is left untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .lowest_empty_row(column)
            .map_err(|_| MoveError::OutOfRange {
                column,
                width: self.board.width(),
            })?
            .ok_or(MoveError::InvalidMove { column })?;

        let player = self.current_player;
        self.board.place(row, column, player);
        self.moves_played += 1;
        log::debug!("{player} dropped into column {column}, landed on row {row}");

        // The mover's tokens are checked before the turn passes.
        if let Some(line) = self.board.line_through(row, column, player) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            log::info!("{player} wins after {} moves", self.moves_played);
            return Ok(MoveOutcome::Won { player, row, column });
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            log::info!("board full after {} moves, game tied", self.moves_played);
            return Ok(MoveOutcome::Tied { row, column, player });
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Placed { row, column, player })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
