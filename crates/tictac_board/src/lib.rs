//! Tic-tac-toe board state and win detection.
//!
//! The crate has no I/O and no opinion on how moves arrive. A front end
//! creates a [`Board`], feeds cell ids to [`Board::place_symbol`], asks
//! [`game_winner`] after each move and calls [`Board::lock`] on a win.
//!
//! ```
//! use tictac_board::{Board, Symbol, game_winner};
//!
//! let mut board = Board::new(3);
//! for index in [0, 3, 1, 4, 2] {
//!     let id = *board.cells()[index].id();
//!     board.place_symbol(id);
//! }
//! assert_eq!(game_winner(&board), Some(Symbol::from("X")));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod line;
pub mod rules;

pub use board::{BOARD_SIZE, Board};
pub use cell::{Cell, CellId, Symbol, default_symbols};
pub use line::{Line, LineKind, column_indices, diagonal_indices, row_indices};
pub use rules::{WinningLine, game_winner, line_winner, winning_line};
