//! Core game logic: board storage and parsing, move application with row
//! rotation and gravity, wraparound win detection, and move input.

mod board;
mod input;
mod moves;
mod parse;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, MAX_COLS, MIN_CELLS, MIN_COLS};
pub use input::{parse_coordinate, read_move, DEFAULT_MAX_LINE_LEN};
pub use moves::{is_valid_move, is_winning_move, next_player, play_move, Move, Rotation};
pub use parse::parse_board;
pub use player::{GameOutcome, Player};
pub use state::Game;
pub use win::{current_winner, mark_winning_lines};
