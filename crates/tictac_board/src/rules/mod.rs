//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so callers decide when to evaluate them.

pub mod win;

pub use win::{WinningLine, game_winner, line_winner, winning_line};
