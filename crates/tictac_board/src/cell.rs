//! Cells, cell identifiers and player symbols.

use derive_getters::Getters;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::instrument;

/// Process-wide source of cell ids. Never reset, not even by a new game.
static NEXT_CELL_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identifier of a cell.
///
/// Ids are handed out sequentially from 0 across the whole process, so a
/// cell id from a previous game never matches a cell of the current one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[serde(transparent)]
pub struct CellId(u64);

impl CellId {
    /// Allocates the next id from the process-wide counter.
    pub fn next() -> Self {
        CellId(NEXT_CELL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A player's mark, e.g. `X` or `O`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from any string-like value.
    pub fn new(mark: impl Into<String>) -> Self {
        Symbol(mark.into())
    }

    /// Returns the mark as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(mark: &str) -> Self {
        Symbol::new(mark)
    }
}

/// The default pair of symbols. The first one moves first.
pub fn default_symbols() -> [Symbol; 2] {
    [Symbol::new("X"), Symbol::new("O")]
}

/// A single square of the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Cell {
    /// Identifier, fixed for the lifetime of the cell.
    id: CellId,
    /// Symbol placed here, if any.
    value: Option<Symbol>,
}

impl Cell {
    /// Creates an empty cell with a freshly allocated id.
    #[instrument(level = "trace")]
    pub(crate) fn fresh() -> Self {
        Self {
            id: CellId::next(),
            value: None,
        }
    }

    /// Returns true if nobody has claimed this cell yet.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Writes a symbol into the cell. Callers check emptiness first.
    pub(crate) fn claim(&mut self, symbol: Symbol) {
        self.value = Some(symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let a = CellId::next();
        let b = CellId::next();
        assert!(b > a);
    }

    #[test]
    fn test_fresh_cell_is_empty() {
        let cell = Cell::fresh();
        assert!(cell.is_empty());
        assert_eq!(cell.value(), &None);
    }

    #[test]
    fn test_claim_sets_value() {
        let mut cell = Cell::fresh();
        cell.claim(Symbol::from("X"));
        assert!(!cell.is_empty());
        assert_eq!(cell.value().as_ref().map(Symbol::as_str), Some("X"));
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new("O").to_string(), "O");
    }
}
