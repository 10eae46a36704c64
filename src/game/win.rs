//! Four-in-a-row detection.
//!
//! Rows are treated as cycles: any run that steps sideways wraps from the last
//! column back to the first, for horizontal and diagonal lines alike.

use log::debug;

use crate::error::BoardError;

use super::board::{Board, Cell, MIN_COLS};
use super::player::{GameOutcome, Player};

/// Step between consecutive cells of a line, as (rows, columns).
type Direction = (usize, isize);

const HORIZONTAL: Direction = (0, 1);
const DOWN_RIGHT: Direction = (1, 1);
const DOWN_LEFT: Direction = (1, -1);
const VERTICAL: Direction = (1, 0);

const LINE_LEN: usize = 4;

fn line_cell(
    board: &Board,
    row: usize,
    col: usize,
    (dr, dc): Direction,
    step: usize,
) -> (usize, usize) {
    let cols = board.cols() as isize;
    let c = (col as isize + dc * step as isize).rem_euclid(cols);
    (row + dr * step, c as usize)
}

/// The three cells after (row, col) in `direction` all hold exactly `cell`.
fn completes(board: &Board, row: usize, col: usize, cell: Cell, direction: Direction) -> bool {
    (1..LINE_LEN).all(|step| {
        let (r, c) = line_cell(board, row, col, direction, step);
        board.get(r, c) == cell
    })
}

fn mark(board: &mut Board, row: usize, col: usize, direction: Direction, player: Player) {
    for step in 0..LINE_LEN {
        let (r, c) = line_cell(board, row, col, direction, step);
        board.set(r, c, player.winning_cell());
    }
}

/// Record a completed line. Returns true when the scan must stop because
/// the other player already completed a line.
fn claim(found: &mut Option<Player>, player: Player) -> bool {
    match *found {
        None => {
            *found = Some(player);
            false
        }
        Some(winner) => winner == player.other(),
    }
}

/// Scan the board once, row-major, and mark every completed line as winning
/// cells.
///
/// Once a player has a line, their remaining tokens are no longer used as
/// line starts. A completed line for the opponent halts the scan. From each
/// start cell a horizontal line is tried first; only if that fails, and at
/// least four rows remain, the down-right diagonal is tried and then the
/// down-left diagonal, with the vertical as its fallback.
///
/// Returns the first player found with a line.
pub fn mark_winning_lines(board: &mut Board) -> Result<Option<Player>, BoardError> {
    let mut found: Option<Player> = None;

    'scan: for row in 0..board.rows() {
        for col in 0..board.cols() {
            let cell = board.get(row, col);
            let Some(player) = cell.token() else {
                continue;
            };
            if found == Some(player) {
                continue;
            }

            let horizontal =
                board.cols() >= MIN_COLS && completes(board, row, col, cell, HORIZONTAL);
            let halt = if horizontal {
                mark(board, row, col, HORIZONTAL, player);
                claim(&mut found, player)
            } else if board.rows() - row >= LINE_LEN {
                let mut halt = false;
                if completes(board, row, col, cell, DOWN_RIGHT) {
                    mark(board, row, col, DOWN_RIGHT, player);
                    halt = claim(&mut found, player);
                }
                if !halt {
                    if completes(board, row, col, cell, DOWN_LEFT) {
                        mark(board, row, col, DOWN_LEFT, player);
                        halt = claim(&mut found, player);
                    } else if completes(board, row, col, cell, VERTICAL) {
                        mark(board, row, col, VERTICAL, player);
                        halt = claim(&mut found, player);
                    }
                }
                halt
            } else {
                false
            };

            if halt {
                debug!("both players completed a line; stopping at ({row}, {col})");
                break 'scan;
            }
        }
    }

    if let Some(player) = found {
        if !board.has_winning_cells(player) {
            return Err(BoardError::InvalidWinnerState);
        }
        debug!("player {} has a winning line", player.symbol());
    }
    Ok(found)
}

/// Outcome implied by the marks on the board: a player with winning cells has
/// won, both players with winning cells is a draw, and so is a full board
/// with no winner.
pub fn current_winner(board: &Board) -> Option<GameOutcome> {
    let x = board.has_winning_cells(Player::X);
    let o = board.has_winning_cells(Player::O);
    match (x, o) {
        (true, true) => Some(GameOutcome::Draw),
        (true, false) => Some(GameOutcome::Winner(Player::X)),
        (false, true) => Some(GameOutcome::Winner(Player::O)),
        (false, false) if board.is_full() => Some(GameOutcome::Draw),
        (false, false) => None,
    }
}
