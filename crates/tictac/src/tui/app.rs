//! Application state and event handling.

use super::input::{digit_position, hit_test, move_cursor};
use super::ui;
use crate::session::{Announcement, GameSession};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info};

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: usize,
    status_message: String,
    announcement: Option<Announcement>,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    /// Creates an application around a session.
    pub fn new(session: GameSession) -> Self {
        let status_message = turn_message(&session);
        Self {
            session,
            cursor: 0,
            status_message,
            announcement: None,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position (row-major).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The last delivered announcement, shown until the next reset.
    pub fn announcement(&self) -> Option<&Announcement> {
        self.announcement.as_ref()
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the frame area so mouse clicks can be mapped to cells.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        debug!(code = ?key.code, "Key pressed");

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.click(position);
                }
            }
            code => {
                let size = self.session.board().size();
                self.cursor = move_cursor(self.cursor, size, code);
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let cells = ui::cell_rects(self.viewport, self.session.board().size());
        if let Some(position) = hit_test(&cells, mouse.column, mouse.row) {
            debug!(position, "Mouse click on cell");
            self.cursor = position;
            self.click(position);
        }
    }

    /// Clicks the cell at a position through the session's click handler.
    fn click(&mut self, position: usize) {
        // The renderer hands the session ids, never positions.
        let Some(id) = self
            .session
            .board()
            .rows()
            .iter()
            .flat_map(|row| row.ids())
            .nth(position)
        else {
            return;
        };

        self.session.click(id);
        if !self.session.board().is_locked() {
            self.status_message = turn_message(&self.session);
        }
    }

    /// Delivers pending announcements. Called after every event and before
    /// the next one is read.
    pub fn drain_announcements(&mut self) {
        while let Some(announcement) = self.session.take_announcement() {
            info!(%announcement, "Announcing winner");
            self.status_message = format!("{} Press 'r' to restart or 'q' to quit.", announcement);
            self.announcement = Some(announcement);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.announcement = None;
        self.cursor = 0;
        self.status_message = format!("Game restarted. {}", turn_message(&self.session));
    }
}

fn turn_message(session: &GameSession) -> String {
    format!("Player {}'s turn.", session.board().current_symbol())
}
