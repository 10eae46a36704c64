//! Reading moves typed by a player.

use std::io::{BufRead, Write};

use crate::error::InputError;

use super::board::Board;
use super::moves::{next_player, Move};

/// Default longest accepted input line, excluding the line terminator.
pub const DEFAULT_MAX_LINE_LEN: usize = 48;

/// Parse one coordinate typed by a player.
///
/// Accepts a signed integer with optional surrounding whitespace. An empty
/// line, trailing garbage, an out-of-range number, or a line longer than
/// `max_len` all yield `sentinel`.
pub fn parse_coordinate(line: &str, sentinel: i32, max_len: usize) -> i32 {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    if line.len() > max_len {
        return sentinel;
    }
    line.trim().parse().unwrap_or(sentinel)
}

fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String, InputError> {
    write!(writer, "{prompt}")?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::EndOfInput);
    }
    Ok(line)
}

/// Prompt for and read a column, then a rotation row.
///
/// Malformed answers become a value that [`super::is_valid_move`] rejects:
/// twice the column count for the column, twice the row count for the row.
pub fn read_move<R: BufRead, W: Write>(
    board: &Board,
    reader: &mut R,
    writer: &mut W,
    max_len: usize,
) -> Result<Move, InputError> {
    let symbol = next_player(board).map(|p| p.symbol()).unwrap_or('?');
    let column_sentinel = sentinel(board.cols());
    let row_sentinel = sentinel(board.rows());

    let line = prompt_line(
        reader,
        writer,
        &format!("Player {symbol} enter column to place your token: "),
    )?;
    let column = parse_coordinate(&line, column_sentinel, max_len);

    let line = prompt_line(reader, writer, &format!("Player {symbol} enter row to rotate: "))?;
    let row = parse_coordinate(&line, row_sentinel, max_len);

    Ok(Move { column, row })
}

fn sentinel(extent: usize) -> i32 {
    i32::try_from(extent.saturating_mul(2)).unwrap_or(i32::MAX)
}
