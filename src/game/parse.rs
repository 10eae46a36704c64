//! Board file parsing and validation.

use std::str::FromStr;

use log::debug;

use crate::error::BoardError;

use super::board::{check_dimensions, Board, Cell, MAX_COLS};
use super::moves::next_player;
use super::win::mark_winning_lines;

/// Parse and validate a board snapshot.
///
/// Lines may end in `\n` or `\r\n`; blank lines are skipped. Every remaining
/// line is one row, top row first. A board that already contains tokens must
/// be gravity-consistent and balanced, and any completed lines in it are
/// marked before it is returned.
pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let mut cells = Vec::new();
    let mut cols: Option<usize> = None;
    let mut rows = 0;

    for (index, raw) in text.split('\n').enumerate() {
        let line_no = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }

        let mut width = 0;
        for (col, c) in line.chars().enumerate() {
            let cell = Cell::from_input_char(c).ok_or(BoardError::InvalidCharacter {
                line: line_no,
                column: col + 1,
                found: c,
            })?;
            width += 1;
            if width > MAX_COLS {
                return Err(BoardError::ColumnCountTooHigh(line.chars().count()));
            }
            cells.push(cell);
        }

        match cols {
            None => cols = Some(width),
            Some(expected) if expected != width => {
                return Err(BoardError::InconsistentRowLength {
                    line: line_no,
                    expected,
                    found: width,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let cols = cols.ok_or(BoardError::RowCountTooLow)?;
    check_dimensions(rows, cols)?;

    let mut board = Board::from_cells(rows, cols, cells);
    if board.has_tokens() {
        if let Some((row, col)) = board.find_floating_token() {
            return Err(BoardError::FloatingToken { row, col });
        }
        next_player(&board)?;
        mark_winning_lines(&mut board)?;
    }
    debug!("parsed {}x{} board", rows, cols);
    Ok(board)
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{current_winner, GameOutcome, Player};

    #[test]
    fn test_parse_simple_board() {
        let board = parse_board("....\n....\n....\nxo..\n").unwrap();
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.get(3, 0), Cell::X);
        assert_eq!(board.get(3, 1), Cell::O);
        assert_eq!(board.get(2, 0), Cell::Empty);
    }

    #[test]
    fn test_round_trip() {
        for text in ["....\n....\n....\nxo..\n", "......\n.x....\nxoo...\n", "....\n....\n"] {
            assert_eq!(parse_board(text).unwrap().to_text(), text);
        }
    }

    #[test]
    fn test_missing_final_newline_and_crlf() {
        let board = parse_board("....\r\n....\r\nxo..").unwrap();
        assert_eq!(board.to_text(), "....\n....\nxo..\n");
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let board = parse_board("....\n\n....\n\n\n").unwrap();
        assert_eq!(board.rows(), 2);
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            parse_board("....\n..X.\n"),
            Err(BoardError::InvalidCharacter {
                line: 2,
                column: 3,
                found: 'X'
            })
        );
        assert!(matches!(
            parse_board("....\n.. .\n"),
            Err(BoardError::InvalidCharacter { found: ' ', .. })
        ));
    }

    #[test]
    fn test_inconsistent_row_length() {
        assert_eq!(
            parse_board("....\n.....\n"),
            Err(BoardError::InconsistentRowLength {
                line: 2,
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn test_dimension_errors() {
        assert_eq!(parse_board(""), Err(BoardError::RowCountTooLow));
        assert_eq!(parse_board("\n\n"), Err(BoardError::RowCountTooLow));
        assert_eq!(
            parse_board("...\n...\n...\n"),
            Err(BoardError::ColumnCountTooLow(3))
        );
        let wide = ".".repeat(513);
        assert_eq!(
            parse_board(&wide),
            Err(BoardError::ColumnCountTooHigh(513))
        );
        assert!(parse_board(&".".repeat(512)).is_ok());
    }

    #[test]
    fn test_grid_too_small() {
        assert_eq!(
            parse_board("....\n"),
            Err(BoardError::GridTooSmall { rows: 1, cols: 4 })
        );
        assert_eq!(
            parse_board(".......\n"),
            Err(BoardError::GridTooSmall { rows: 1, cols: 7 })
        );
    }

    #[test]
    fn test_floating_token() {
        assert_eq!(
            parse_board("....\nx...\n....\no...\n"),
            Err(BoardError::FloatingToken { row: 1, col: 0 })
        );
    }

    #[test]
    fn test_token_imbalance() {
        assert_eq!(parse_board("....\nxx..\n"), Err(BoardError::TooManyX));
        assert_eq!(parse_board("....\no...\n"), Err(BoardError::TooManyO));
    }

    #[test]
    fn test_existing_win_is_marked() {
        let board = parse_board(".....\no....\no....\noxxxx\n").unwrap();
        assert_eq!(board.to_text(), ".....\no....\no....\noXXXX\n");
        assert_eq!(current_winner(&board), Some(GameOutcome::Winner(Player::X)));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let board = parse_board("xoxo\noxox\n").unwrap();
        assert_eq!(current_winner(&board), Some(GameOutcome::Draw));
    }
}
