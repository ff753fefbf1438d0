//! Tests for the click/reset handlers and announcement delivery.

use tictac::{GameSession, Symbol};

fn ids(session: &GameSession) -> Vec<tictac::CellId> {
    session.board().cells().iter().map(|c| *c.id()).collect()
}

#[test]
fn test_anti_diagonal_win_through_session() {
    let mut session = GameSession::default();
    let ids = ids(&session);
    // X: 0, 1, 8  O: 2, 4, 6
    for index in [0, 2, 1, 4, 8, 6] {
        session.click(ids[index]);
    }

    let announcement = session.take_announcement().expect("O won");
    assert_eq!(announcement.winner(), &Symbol::from("O"));
    assert_eq!(announcement.line().cell_ids(), &vec![ids[2], ids[4], ids[6]]);
    assert!(session.board().is_locked());
}

#[test]
fn test_locked_board_ignores_clicks() {
    let mut session = GameSession::default();
    let ids = ids(&session);
    for index in [0, 3, 1, 4, 2] {
        session.click(ids[index]);
    }
    let _ = session.take_announcement();

    let turn = session.board().current_symbol_index();
    session.click(ids[8]);
    assert!(session.board().cells()[8].is_empty());
    assert_eq!(session.board().current_symbol_index(), turn);
    assert!(!session.has_pending_announcement());
}

#[test]
fn test_each_game_announces_once() {
    let mut session = GameSession::default();
    let mut delivered = Vec::new();

    for _ in 0..2 {
        for index in [0, 3, 1, 4, 2] {
            session.click_position(index);
            while let Some(a) = session.take_announcement() {
                delivered.push(a);
            }
        }
        session.reset();
    }

    assert_eq!(delivered.len(), 2);
    assert_ne!(delivered[0].line().cell_ids(), delivered[1].line().cell_ids());
}

#[test]
fn test_unknown_id_through_session() {
    let mut session = GameSession::default();
    session.click(tictac::CellId::from(u64::MAX));
    assert!(session.board().cells().iter().all(|c| c.is_empty()));
    assert_eq!(session.board().current_symbol_index(), 0);
}
