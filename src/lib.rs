//! # Connect Four
//!
//! Game engine for Connect Four: two players take turns dropping tokens into
//! the columns of a vertical grid until one of them lines up four in a row
//! or the board fills.
//!
//! The engine owns no presentation. A front end creates a [`game::GameState`],
//! forwards each chosen column to [`game::GameState::apply_move`], and renders
//! the returned [`game::MoveOutcome`].
//!
//! ## Modules
//!
//! - [`game`] — Board storage, players, move application, win/tie detection
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use error::{BoardError, ConfigError, MoveError};
pub use game::{Board, Cell, GameState, GameStatus, MoveOutcome, Player};
