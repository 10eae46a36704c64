use std::path::PathBuf;

use crate::game::Move;

/// Errors raised while building a board from text or while mutating it.
///
/// None of these are recoverable for the board instance that produced them:
/// a board that failed validation must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid character {found:?} at line {line}, column {column} (expected '.', 'x' or 'o')")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("line {line} has {found} columns but earlier rows have {expected}")]
    InconsistentRowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("board has no rows")]
    RowCountTooLow,

    #[error("board has {0} columns, at least 4 are required")]
    ColumnCountTooLow(usize),

    #[error("board has {0} columns, at most 512 are allowed")]
    ColumnCountTooHigh(usize),

    #[error("a {rows}x{cols} grid is too small for anybody to win (need at least 8 cells)")]
    GridTooSmall { rows: usize, cols: usize },

    #[error("floating token at row {row}, column {col}: the cell below it is empty")]
    FloatingToken { row: usize, col: usize },

    #[error("too many 'x' tokens on the board")]
    TooManyX,

    #[error("too many 'o' tokens on the board")]
    TooManyO,

    #[error("winner detection reached an inconsistent state")]
    InvalidWinnerState,

    #[error("invalid move: column {}, row {}", .0.column, .0.row)]
    InvalidMove(Move),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from the interactive move reader.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("I/O error while reading a move: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before a move was entered")]
    EndOfInput,
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
        let err = BoardError::FloatingToken { row: 1, col: 3 };
        assert_eq!(
            err.to_string(),
            "floating token at row 1, column 3: the cell below it is empty"
        );
    }

    #[test]
    fn test_invalid_move_display() {
        let err = BoardError::InvalidMove(Move { column: 9, row: -2 });
        assert_eq!(err.to_string(), "invalid move: column 9, row -2");
    }

    #[test]
    fn test_invalid_character_display() {
        let err = BoardError::InvalidCharacter {
            line: 2,
            column: 4,
            found: 'X',
        };
        assert_eq!(
            err.to_string(),
            "invalid character 'X' at line 2, column 4 (expected '.', 'x' or 'o')"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("input.max_line_len must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: input.max_line_len must be > 0"
        );
    }
}
