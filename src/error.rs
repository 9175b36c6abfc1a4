use std::path::PathBuf;

/// Errors from constructing or querying a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}: both must be > 0")]
    InvalidDimension { width: usize, height: usize },

    #[error("column {column} out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("cell ({row}, {column}) out of range")]
    CellOutOfRange { row: usize, column: usize },
}

/// Reasons a move is rejected. A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    InvalidMove { column: usize },

    #[error("column {column} out of range (board has {width} columns)")]
    OutOfRange { column: usize, width: usize },

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimension { width: 0, height: 6 };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 0x6: both must be > 0"
        );
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidMove { column: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(
            MoveError::OutOfRange { column: 9, width: 7 }.to_string(),
            "column 9 out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game is over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be > 0"
        );
    }
}
