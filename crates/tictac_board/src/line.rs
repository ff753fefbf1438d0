//! Rows, columns and diagonals as views into the board's cells.

use super::cell::{Cell, CellId};
use serde::Serialize;
use strum::{Display, EnumIter};

/// Which family a line belongs to.
///
/// Declaration order is the order lines are evaluated for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum LineKind {
    /// A horizontal line.
    Row,
    /// A vertical line.
    Column,
    /// Index 0 is the main diagonal, index 1 the anti-diagonal.
    Diagonal,
}

/// An ordered view of `size` cells. Borrowed, never owned.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    kind: LineKind,
    index: usize,
    cells: Vec<&'a Cell>,
}

impl<'a> Line<'a> {
    pub(crate) fn new(kind: LineKind, index: usize, cells: Vec<&'a Cell>) -> Self {
        Self { kind, index, cells }
    }

    /// Returns the line family.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the position of this line within its family.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the cells in line order.
    pub fn cells(&self) -> &[&'a Cell] {
        &self.cells
    }

    /// Returns the ids of the cells in line order.
    pub fn ids(&self) -> Vec<CellId> {
        self.cells.iter().map(|cell| *cell.id()).collect()
    }

    /// Number of cells in the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for the degenerate line of a zero-sized board.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Cached cell indices for every line of a board of a given size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LineLayout {
    rows: Vec<Vec<usize>>,
    columns: Vec<Vec<usize>>,
    diagonals: Vec<Vec<usize>>,
}

impl LineLayout {
    /// Derives all line indices for a square board of `size`.
    pub(crate) fn for_size(size: usize) -> Self {
        Self {
            rows: row_indices(size),
            columns: column_indices(size),
            diagonals: diagonal_indices(size),
        }
    }

    /// Returns the index lists for one family.
    pub(crate) fn of(&self, kind: LineKind) -> &[Vec<usize>] {
        match kind {
            LineKind::Row => &self.rows,
            LineKind::Column => &self.columns,
            LineKind::Diagonal => &self.diagonals,
        }
    }
}

/// Row `i` covers `[i*size, i*size + size)`.
pub fn row_indices(size: usize) -> Vec<Vec<usize>> {
    (0..size)
        .map(|row| (row * size..row * size + size).collect())
        .collect()
}

/// Column `j` covers `j, j+size, j+2*size, ...`.
pub fn column_indices(size: usize) -> Vec<Vec<usize>> {
    (0..size)
        .map(|col| (0..size).map(|row| row * size + col).collect())
        .collect()
}

/// Main diagonal first, then the anti-diagonal.
///
/// Both are built from (row, col) pairs: `(i, i)` and `(i, size-1-i)`.
/// For size 3 this yields `[0, 4, 8]` and `[2, 4, 6]`.
pub fn diagonal_indices(size: usize) -> Vec<Vec<usize>> {
    let main = (0..size).map(|i| i * size + i).collect();
    let anti = (0..size).map(|i| i * size + (size - 1 - i)).collect();
    vec![main, anti]
}
