//! Headless play: apply a list of clicks and report the result.

use crate::config::GameConfig;
use crate::session::{Announcement, GameSession};
use serde::Serialize;
use tictac_board::{BOARD_SIZE, Board};
use tracing::{info, instrument};

/// Board plus the announcements delivered while replaying.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// Final board.
    pub board: &'a Board,
    /// Announcements in delivery order.
    pub announcements: &'a [Announcement],
}

/// Result of a replay.
#[derive(Debug)]
pub struct Replay {
    session: GameSession,
    announcements: Vec<Announcement>,
}

impl Replay {
    /// Clicks each 1-based position in order on a fresh board.
    ///
    /// Announcements are drained after every click, the same way the
    /// terminal loop does between events.
    #[instrument(skip(config))]
    pub fn run(config: &GameConfig, positions: &[usize]) -> Self {
        let mut session = GameSession::new(BOARD_SIZE, config.player_symbols());
        let mut announcements = Vec::new();

        for &position in positions {
            match position.checked_sub(1) {
                Some(index) => session.click_position(index),
                None => info!("Position 0 does not exist, skipping"),
            }
            while let Some(announcement) = session.take_announcement() {
                info!(%announcement, "Announcing winner");
                announcements.push(announcement);
            }
        }

        Self {
            session,
            announcements,
        }
    }

    /// Final board.
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Announcements delivered during the replay.
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Plain-text report: the grid, then either the announcements or whose
    /// turn it is.
    pub fn to_text(&self) -> String {
        let board = self.board();
        let mut out = board.display();
        out.push_str("\n\n");
        if self.announcements.is_empty() {
            out.push_str(&format!("Next to move: {}", board.current_symbol()));
        } else {
            let lines: Vec<String> = self.announcements.iter().map(|a| a.to_string()).collect();
            out.push_str(&lines.join("\n"));
        }
        out
    }

    /// JSON report of the final board and announcements.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Snapshot {
            board: self.board(),
            announcements: &self.announcements,
        })
    }
}
