//! Board state: cells, turn order and lock status.

use super::cell::{Cell, CellId, Symbol, default_symbols};
use super::line::{Line, LineKind, LineLayout};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// The fixed board dimension used by the game front ends.
pub const BOARD_SIZE: usize = 3;

/// Square tic-tac-toe board.
///
/// The board never checks for a winner and never locks itself. Both are the
/// caller's job, see [`crate::game_winner`] and [`Board::lock`].
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    /// Cells per side.
    size: usize,
    /// `size * size` cells in row-major order.
    cells: Vec<Cell>,
    /// Set once a win has been detected.
    locked: bool,
    /// Index into `symbols` of the player to move (0 or 1).
    current_symbol_index: usize,
    /// The two player symbols. Index 0 moves first.
    symbols: [Symbol; 2],
    #[serde(skip)]
    layout: LineLayout,
}

impl Board {
    /// Creates a board with the default `X`/`O` symbols.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self::with_symbols(size, default_symbols())
    }

    /// Creates a board with custom symbols.
    #[instrument]
    pub fn with_symbols(size: usize, symbols: [Symbol; 2]) -> Self {
        let mut board = Self {
            size,
            cells: Vec::new(),
            locked: false,
            current_symbol_index: 0,
            symbols,
            layout: LineLayout::default(),
        };
        board.initialize(size);
        board
    }

    /// Discards every cell and starts over with fresh ids.
    ///
    /// Unlocks the board, hands the turn back to the first symbol and
    /// recomputes the line cache. Symbols are kept.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, size: usize) {
        self.size = size;
        self.cells = (0..size * size).map(|_| Cell::fresh()).collect();
        self.locked = false;
        self.current_symbol_index = 0;
        self.layout = LineLayout::for_size(size);
        info!(
            size,
            first_id = ?self.cells.first().map(|c| *c.id()),
            "Board initialized"
        );
    }

    /// Places the current symbol on the cell with the given id.
    ///
    /// Unknown ids and occupied cells are ignored. The turn only advances
    /// when a symbol was actually placed. The lock is not consulted here.
    #[instrument(skip(self), fields(cell_id = %cell_id))]
    pub fn place_symbol(&mut self, cell_id: CellId) {
        let Some(cell) = self.cells.iter_mut().find(|c| *c.id() == cell_id) else {
            debug!("No such cell, ignoring");
            return;
        };

        if !cell.is_empty() {
            debug!(value = ?cell.value(), "Cell already taken, ignoring");
            return;
        }

        let symbol = self.symbols[self.current_symbol_index].clone();
        debug!(symbol = %symbol, "Placing symbol");
        cell.claim(symbol);
        self.current_symbol_index = 1 - self.current_symbol_index;
    }

    /// Locks the board. Idempotent.
    #[instrument(skip(self))]
    pub fn lock(&mut self) {
        if !self.locked {
            info!("Board locked");
        }
        self.locked = true;
    }

    /// Returns true once [`Board::lock`] has been called.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Looks up a cell by id.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|c| *c.id() == id)
    }

    /// Looks up a cell by its row-major position.
    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Index of the symbol that moves next (0 or 1).
    pub fn current_symbol_index(&self) -> usize {
        self.current_symbol_index
    }

    /// The symbol that moves next.
    pub fn current_symbol(&self) -> &Symbol {
        &self.symbols[self.current_symbol_index]
    }

    /// Both player symbols.
    pub fn symbols(&self) -> &[Symbol; 2] {
        &self.symbols
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Horizontal lines, top to bottom.
    pub fn rows(&self) -> Vec<Line<'_>> {
        self.lines_of(LineKind::Row)
    }

    /// Vertical lines, left to right.
    pub fn columns(&self) -> Vec<Line<'_>> {
        self.lines_of(LineKind::Column)
    }

    /// Main diagonal, then anti-diagonal.
    pub fn diagonals(&self) -> Vec<Line<'_>> {
        self.lines_of(LineKind::Diagonal)
    }

    /// Rows, then columns, then diagonals.
    pub fn lines(&self) -> Vec<Line<'_>> {
        LineKind::iter()
            .flat_map(|kind| self.lines_of(kind))
            .collect()
    }

    fn lines_of(&self, kind: LineKind) -> Vec<Line<'_>> {
        self.layout
            .of(kind)
            .iter()
            .enumerate()
            .map(|(index, indices)| {
                let cells = indices.iter().map(|&i| &self.cells[i]).collect();
                Line::new(kind, index, cells)
            })
            .collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based position.
    pub fn display(&self) -> String {
        let width = (self.size * self.size).to_string().len().max(
            self.symbols
                .iter()
                .map(|s| s.as_str().chars().count())
                .max()
                .unwrap_or(1),
        );

        let rows: Vec<String> = self
            .rows()
            .iter()
            .map(|row| {
                row.cells()
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        let text = match cell.value() {
                            Some(symbol) => symbol.to_string(),
                            None => (row.index() * self.size + col + 1).to_string(),
                        };
                        format!("{:^width$}", text, width = width)
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();

        let separator = vec!["-".repeat(width); self.size].join("+");
        rows.join(&format!("\n{}\n", separator))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}
