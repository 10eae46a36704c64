use std::fmt;
use std::io;

use crate::error::BoardError;

use super::player::Player;

/// Narrowest board that still allows a horizontal line of four.
pub const MIN_COLS: usize = 4;
/// Widest row accepted from a board file.
pub const MAX_COLS: usize = 512;
/// Fewest cells a board may have.
pub const MIN_CELLS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
    WinningX,
    WinningO,
}

impl Cell {
    /// Owner of the token in this cell, ignoring whether it is part of a win.
    pub fn token(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X | Cell::WinningX => Some(Player::X),
            Cell::O | Cell::WinningO => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_winning(self) -> bool {
        matches!(self, Cell::WinningX | Cell::WinningO)
    }

    /// Character used when rendering the board. Winning cells are uppercase.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'x',
            Cell::O => 'o',
            Cell::WinningX => 'X',
            Cell::WinningO => 'O',
        }
    }

    /// Board files only ever contain lowercase tokens.
    pub fn from_input_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'x' => Some(Cell::X),
            'o' => Some(Cell::O),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Rectangular grid stored row-major in one flat buffer.
///
/// Row 0 is the top of the board, row `rows - 1` the bottom. Cloning copies
/// the cell buffer, so moves played on a clone never reach the source board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board, enforcing the same size rules as the parser.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, BoardError> {
        check_dimensions(rows, cols)?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Build a board from an already validated cell buffer.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Board { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// A column is full when its top cell is occupied.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_empty())
    }

    pub fn has_tokens(&self) -> bool {
        self.cells.iter().any(|c| !c.is_empty())
    }

    /// Whether any cell is marked as part of a completed line for `player`.
    pub fn has_winning_cells(&self, player: Player) -> bool {
        self.cells
            .iter()
            .any(|c| c.is_winning() && c.token() == Some(player))
    }

    /// Drop a token into `col`, returning the row where it landed, or `None`
    /// when the column has no empty cell.
    pub fn drop_token(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = (0..self.rows).rev().find(|&row| self.get(row, col).is_empty())?;
        self.set(row, col, cell);
        Some(row)
    }

    /// Shift row `row` one cell to the left, the leftmost cell wrapping to the end.
    pub fn rotate_row_left(&mut self, row: usize) {
        let start = row * self.cols;
        self.cells[start..start + self.cols].rotate_left(1);
    }

    /// Shift row `row` one cell to the right, the rightmost cell wrapping to the start.
    pub fn rotate_row_right(&mut self, row: usize) {
        let start = row * self.cols;
        self.cells[start..start + self.cols].rotate_right(1);
    }

    /// Let every token fall as far as it can. Each column is compacted
    /// towards the bottom independently and keeps its token order.
    pub fn apply_gravity(&mut self) {
        for col in 0..self.cols {
            let mut write = self.rows;
            for row in (0..self.rows).rev() {
                let cell = self.get(row, col);
                if cell.is_empty() {
                    continue;
                }
                write -= 1;
                if write != row {
                    self.set(write, col, cell);
                    self.set(row, col, Cell::Empty);
                }
            }
        }
    }

    /// First token found resting on an empty cell, scanning row-major.
    pub fn find_floating_token(&self) -> Option<(usize, usize)> {
        (0..self.rows.saturating_sub(1))
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .find(|&(row, col)| {
                !self.get(row, col).is_empty() && self.get(row + 1, col).is_empty()
            })
    }

    /// Write the board row by row, one line terminator per row.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Size rules shared by the parser and [`Board::empty`].
pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<(), BoardError> {
    if rows < 1 {
        return Err(BoardError::RowCountTooLow);
    }
    if cols < MIN_COLS {
        return Err(BoardError::ColumnCountTooLow(cols));
    }
    if cols > MAX_COLS {
        return Err(BoardError::ColumnCountTooHigh(cols));
    }
    if rows * cols < MIN_CELLS {
        return Err(BoardError::GridTooSmall { rows, cols });
    }
    Ok(())
}
