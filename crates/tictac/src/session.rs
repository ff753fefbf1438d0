//! Game session: the click and reset handlers around a board.

use derive_getters::Getters;
use derive_more::Display;
use serde::Serialize;
use std::collections::VecDeque;
use tictac_board::{BOARD_SIZE, Board, CellId, Symbol, WinningLine, default_symbols, winning_line};
use tracing::{debug, info, instrument};

/// Notice that a game has been won.
#[derive(Debug, Clone, PartialEq, Eq, Display, Getters, Serialize)]
#[display("{} wins!", winner)]
pub struct Announcement {
    /// The winning symbol.
    winner: Symbol,
    /// The line that decided the game.
    line: WinningLine,
}

/// One game session.
///
/// Winner notices are queued rather than delivered inline. The event loop
/// drains the queue with [`GameSession::take_announcement`] after handling
/// an event and before reading the next one.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    pending: VecDeque<Announcement>,
}

impl GameSession {
    /// Creates a session on a fresh board.
    #[instrument]
    pub fn new(size: usize, symbols: [Symbol; 2]) -> Self {
        info!(size, "Creating game session");
        Self {
            board: Board::with_symbols(size, symbols),
            pending: VecDeque::new(),
        }
    }

    /// Returns the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Handles a click on the cell with the given id.
    ///
    /// Clicks on a locked board are ignored. Otherwise the current symbol is
    /// placed (if the cell accepts it) and every line is checked. A win locks
    /// the board and queues exactly one announcement.
    #[instrument(skip(self), fields(cell_id = %cell_id))]
    pub fn click(&mut self, cell_id: CellId) {
        if self.board.is_locked() {
            debug!("Board locked, click ignored");
            return;
        }

        self.board.place_symbol(cell_id);

        if let Some(line) = winning_line(&self.board) {
            self.board.lock();
            info!(winner = %line.symbol(), kind = %line.kind(), index = line.index(), "Game won");
            self.pending.push_back(Announcement {
                winner: line.symbol().clone(),
                line,
            });
        }
    }

    /// Clicks the cell at a row-major position. Out-of-range positions are
    /// ignored like unknown ids.
    #[instrument(skip(self))]
    pub fn click_position(&mut self, index: usize) {
        match self.board.cell_at(index).map(|cell| *cell.id()) {
            Some(id) => self.click(id),
            None => debug!("No cell at position, click ignored"),
        }
    }

    /// Starts a new game on a fresh board of the same size.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let size = self.board.size();
        self.board.initialize(size);
        info!("Game reset");
    }

    /// Pops the oldest undelivered announcement.
    pub fn take_announcement(&mut self) -> Option<Announcement> {
        self.pending.pop_front()
    }

    /// Returns true while an announcement awaits delivery.
    pub fn has_pending_announcement(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(BOARD_SIZE, default_symbols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: &mut GameSession, positions: &[usize]) {
        for &index in positions {
            session.click_position(index);
        }
    }

    #[test]
    fn test_win_locks_and_announces_once() {
        let mut session = GameSession::default();
        play(&mut session, &[0, 3, 1, 4, 2]);
        assert!(session.board().is_locked());

        let announcement = session.take_announcement().expect("one announcement");
        assert_eq!(announcement.winner().as_str(), "X");
        assert_eq!(announcement.to_string(), "X wins!");
        assert!(session.take_announcement().is_none());

        // Further clicks on a locked board neither place nor announce.
        session.click_position(8);
        assert!(session.board().cells()[8].is_empty());
        assert!(!session.has_pending_announcement());
    }

    #[test]
    fn test_no_announcement_without_win() {
        let mut session = GameSession::default();
        play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(session.board().is_full());
        assert!(!session.board().is_locked());
        assert!(session.take_announcement().is_none());
    }

    #[test]
    fn test_reset_unlocks_with_fresh_ids() {
        let mut session = GameSession::default();
        let old_first = *session.board().cells()[0].id();
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.reset();

        assert!(!session.board().is_locked());
        assert_eq!(session.board().current_symbol_index(), 0);
        assert!(session.board().cells().iter().all(|c| c.is_empty()));
        assert!(*session.board().cells()[0].id() > old_first);

        // A stale id from the previous game is unknown now.
        session.click(old_first);
        assert!(session.board().cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_out_of_range_position_ignored() {
        let mut session = GameSession::default();
        session.click_position(42);
        assert_eq!(session.board().current_symbol_index(), 0);
    }
}
