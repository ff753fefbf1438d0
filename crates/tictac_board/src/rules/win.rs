//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::cell::{Cell, CellId, Symbol};
use crate::line::{Line, LineKind};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// The first line found fully held by one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct WinningLine {
    /// Symbol filling the line.
    symbol: Symbol,
    /// Family of the line.
    kind: LineKind,
    /// Position of the line within its family.
    index: usize,
    /// Cells of the line, in line order.
    cell_ids: Vec<CellId>,
}

/// Returns the symbol filling every cell of `line`, if any.
///
/// Folds over the cells starting from the first cell's value. The
/// accumulator survives a step only if it equals the next cell's value, so a
/// single empty or differing cell clears it for good.
pub fn line_winner<'a>(line: &Line<'a>) -> Option<&'a Symbol> {
    let mut cells = line.cells().iter().copied();
    let first: &'a Cell = cells.next()?;
    cells.fold(first.value().as_ref(), |acc, cell: &'a Cell| {
        if acc == cell.value().as_ref() {
            acc
        } else {
            None
        }
    })
}

/// Finds the first winning line, checking rows, columns, then diagonals.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    board.lines().iter().find_map(|line| {
        line_winner(line).map(|symbol| {
            debug!(kind = %line.kind(), index = line.index(), symbol = %symbol, "Winning line");
            WinningLine {
                symbol: symbol.clone(),
                kind: line.kind(),
                index: line.index(),
                cell_ids: line.ids(),
            }
        })
    })
}

/// Returns the winning symbol, if any line is complete.
///
/// There is no draw detection: a full board without a complete line
/// reports no winner.
#[instrument(skip(board))]
pub fn game_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).map(|line| line.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, moves: &[usize]) {
        for &index in moves {
            let id = *board.cells()[index].id();
            board.place_symbol(id);
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert_eq!(game_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(3);
        // X: 0, 1, 2  O: 3, 4
        fill(&mut board, &[0, 3, 1, 4, 2]);
        assert_eq!(game_winner(&board), Some(Symbol::from("X")));
        let line = winning_line(&board).expect("row win");
        assert_eq!(*line.kind(), LineKind::Row);
        assert_eq!(*line.index(), 0);
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new(3);
        // X: 0, 3, 8  O: 1, 4, 7
        fill(&mut board, &[0, 1, 3, 4, 8, 7]);
        let line = winning_line(&board).expect("column win");
        assert_eq!(line.symbol().as_str(), "O");
        assert_eq!(*line.kind(), LineKind::Column);
        assert_eq!(*line.index(), 1);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new(3);
        fill(&mut board, &[0, 4, 1]);
        assert_eq!(game_winner(&board), None);
    }

    #[test]
    fn test_line_winner_mixed_line() {
        let mut board = Board::new(3);
        fill(&mut board, &[0, 1]);
        assert_eq!(line_winner(&board.rows()[0]), None);
    }

    #[test]
    fn test_empty_line_has_no_winner() {
        let board = Board::new(0);
        assert!(board.diagonals().iter().all(|line| line_winner(line).is_none()));
        assert_eq!(game_winner(&board), None);
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1);
        fill(&mut board, &[0]);
        let line = winning_line(&board).expect("one cell wins");
        assert_eq!(*line.kind(), LineKind::Row);
        assert_eq!(line.symbol().as_str(), "X");
    }
}
