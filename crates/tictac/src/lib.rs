//! tictac - terminal tic-tac-toe
//!
//! Presentation glue around [`tictac_board`].
//!
//! # Architecture
//!
//! - **Session**: click and reset handlers, winner announcements
//! - **Config**: TOML configuration (player symbols, logging)
//! - **Replay**: headless play from a list of positions
//! - **TUI**: ratatui renderer with keyboard and mouse input
//!
//! # Example
//!
//! ```
//! use tictac::{GameConfig, Replay};
//!
//! let replay = Replay::run(&GameConfig::default(), &[1, 4, 2, 5, 3]);
//! assert_eq!(replay.announcements()[0].to_string(), "X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Session management
pub use session::{Announcement, GameSession};

// Crate-level exports - Headless play
pub use replay::{Replay, Snapshot};

// Crate-level exports - Board types
pub use tictac_board::{Board, Cell, CellId, Symbol, WinningLine, game_winner};
