//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_board::{Board, Cell, CellId};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders title, board and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [title_area, _, status_area] = regions(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic-Tac-Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "arrows + enter, 1-9 or mouse to play | r restart | q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, area, app);

    let status_style = if app.announcement().is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.session().board();
    let winning: Vec<CellId> = app
        .announcement()
        .map(|a| a.line().cell_ids().clone())
        .unwrap_or_default();
    let rects = cell_rects(area, board.size());

    // Rows are the renderer's only view of the board.
    let cells = board.rows().into_iter().flat_map(|row| row.cells().to_vec());
    for (position, (cell, rect)) in cells.zip(rects).enumerate() {
        let highlight = winning.contains(cell.id());
        draw_cell(frame, rect, board, cell, position, position == app.cursor(), highlight);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cell: &Cell,
    position: usize,
    selected: bool,
    winning: bool,
) {
    let (text, mut style) = match cell.value() {
        Some(symbol) => {
            let color = if symbol == &board.symbols()[0] {
                Color::Blue
            } else {
                Color::Red
            };
            (
                symbol.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => ((position + 1).to_string(), Style::default().fg(Color::DarkGray)),
    };

    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

/// Splits the frame into title, board and status regions.
fn regions(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Screen rectangles of every cell in row-major order.
///
/// Used both for drawing and for mapping mouse clicks back to cells, so the
/// two can never disagree.
pub fn cell_rects(area: Rect, size: usize) -> Vec<Rect> {
    let [_, board_area, _] = regions(area);
    let side = size as u16;
    let grid = center_rect(board_area, CELL_WIDTH * side, CELL_HEIGHT * side);

    (0..side)
        .flat_map(|row| {
            (0..side).map(move |col| {
                Rect::new(
                    grid.x + col * CELL_WIDTH,
                    grid.y + row * CELL_HEIGHT,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                )
                .intersection(area)
            })
        })
        .collect()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rects_centered_grid() {
        let rects = cell_rects(Rect::new(0, 0, 80, 24), 3);
        assert_eq!(rects.len(), 9);
        assert_eq!(rects[0], Rect::new(29, 7, 7, 3));
        assert_eq!(rects[4], Rect::new(36, 10, 7, 3));
        assert_eq!(rects[8], Rect::new(43, 13, 7, 3));
    }

    #[test]
    fn test_cell_rects_do_not_overlap() {
        let rects = cell_rects(Rect::new(0, 0, 80, 24), 3);
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }
}
