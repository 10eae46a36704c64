use crate::error::BoardError;

use super::board::Board;
use super::moves::{is_valid_move, next_player, play_move, Move};
use super::player::{GameOutcome, Player};
use super::win::current_winner;

/// A game in progress: an owned board plus a count of moves played on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    turns: usize,
}

impl Game {
    /// Start from a validated board.
    pub fn new(board: Board) -> Self {
        Game { board, turns: 0 }
    }

    /// Parse a board snapshot and start from it.
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        Ok(Game::new(text.parse()?))
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Moves played since this game was created.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn next_player(&self) -> Result<Player, BoardError> {
        next_player(&self.board)
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        current_winner(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Whether `mv` may be played now.
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.is_over() && is_valid_move(mv, &self.board)
    }

    /// Play a move and report the outcome it leads to.
    pub fn play(&mut self, mv: Move) -> Result<Option<GameOutcome>, BoardError> {
        if self.is_over() {
            return Err(BoardError::GameOver);
        }
        play_move(mv, &mut self.board)?;
        self.turns += 1;
        Ok(self.outcome())
    }
}
