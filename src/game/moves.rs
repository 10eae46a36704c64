use log::{debug, trace};

use crate::error::BoardError;

use super::board::Board;
use super::player::{GameOutcome, Player};
use super::win::{current_winner, mark_winning_lines};

/// One turn: drop a token into `column` (1-based), then optionally rotate a row.
///
/// `row == 0` means no rotation. A negative `row` rotates row `rows + row`
/// (counted from the top) one cell to the left, a positive `row` rotates row
/// `rows - row` one cell to the right. Either way `|row|` counts rows up from
/// the bottom, the bottom row being 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: i32,
    pub row: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

impl Move {
    pub fn new(column: i32, row: i32) -> Self {
        Move { column, row }
    }

    /// Row index (from the top) and direction of the rotation, if any.
    /// Only meaningful for a move that passed [`is_valid_move`].
    pub fn rotation(&self, rows: usize) -> Option<(usize, Rotation)> {
        let rows = rows as i32;
        match self.row {
            0 => None,
            r if r < 0 => Some(((rows + r) as usize, Rotation::Left)),
            r => Some(((rows - r) as usize, Rotation::Right)),
        }
    }
}

/// Player to move next: X when both players have the same number of tokens,
/// O when X has one more.
pub fn next_player(board: &Board) -> Result<Player, BoardError> {
    let balance: i64 = board
        .cells()
        .iter()
        .map(|cell| match cell.token() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        })
        .sum();
    match balance {
        0 => Ok(Player::X),
        1 => Ok(Player::O),
        b if b < 0 => Err(BoardError::TooManyO),
        _ => Err(BoardError::TooManyX),
    }
}

/// Column in range and not full, rotation row in `[-rows, rows]`.
pub fn is_valid_move(mv: Move, board: &Board) -> bool {
    let cols = board.cols() as i64;
    let rows = board.rows() as i64;
    let column = i64::from(mv.column);
    let row = i64::from(mv.row);

    if column < 1 || column > cols || board.is_column_full((column - 1) as usize) {
        return false;
    }
    (-rows..=rows).contains(&row)
}

/// Apply a validated move to the board in place: drop the current player's
/// token, rotate the chosen row, let tokens fall, then mark completed lines.
pub fn play_move(mv: Move, board: &mut Board) -> Result<(), BoardError> {
    if !is_valid_move(mv, board) {
        return Err(BoardError::InvalidMove(mv));
    }
    let player = next_player(board)?;
    let col = (mv.column - 1) as usize;

    let landed = board
        .drop_token(col, player.to_cell())
        .ok_or(BoardError::InvalidMove(mv))?;
    trace!("{} dropped into column {} at row {}", player.symbol(), mv.column, landed);

    if let Some((row, rotation)) = mv.rotation(board.rows()) {
        match rotation {
            Rotation::Left => board.rotate_row_left(row),
            Rotation::Right => board.rotate_row_right(row),
        }
        trace!("rotated row {row} {rotation:?}");
    }

    board.apply_gravity();
    mark_winning_lines(board)?;
    debug!("{} played column {} row {}", player.symbol(), mv.column, mv.row);
    Ok(())
}

/// Outcome the board would have after `mv`, computed on a copy.
///
/// An invalid move yields `None`, the same as a valid move that decides
/// nothing; use [`is_valid_move`] to tell the two apart.
pub fn is_winning_move(mv: Move, board: &Board) -> Option<GameOutcome> {
    if !is_valid_move(mv, board) {
        return None;
    }
    let mut copy = board.clone();
    play_move(mv, &mut copy).ok()?;
    current_winner(&copy)
}
