//! Core Connect Four game logic: gravity-drop board, players, and the game
//! state machine that sequences turns and detects wins and ties.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveOutcome};
