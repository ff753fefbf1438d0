//! Keyboard and mouse mapping onto board positions.

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};

/// Moves a row-major cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: usize, size: usize, key: KeyCode) -> usize {
    if size == 0 {
        return cursor;
    }
    let (row, col) = (cursor / size, cursor % size);

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(size - 1)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(size - 1), col),
        _ => (row, col),
    };

    row * size + col
}

/// Maps a digit key `1`..`9` to a row-major position.
pub fn digit_position(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Some(digit as usize - 1),
        _ => None,
    }
}

/// Finds which cell rectangle contains the terminal coordinate.
pub fn hit_test(cells: &[Rect], column: u16, row: u16) -> Option<usize> {
    let point = Position::new(column, row);
    cells.iter().position(|rect| rect.contains(point))
}
