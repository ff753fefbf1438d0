//! Tests for headless replay output.

use tictac::{GameConfig, Replay};

#[test]
fn test_replay_text_with_winner() {
    let replay = Replay::run(&GameConfig::default(), &[1, 4, 2, 5, 3]);
    assert_eq!(
        replay.to_text(),
        "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nX wins!"
    );
}

#[test]
fn test_replay_text_in_progress() {
    let replay = Replay::run(&GameConfig::default(), &[5]);
    assert!(replay.to_text().ends_with("Next to move: O"));
}

#[test]
fn test_replay_ignores_invalid_positions() {
    // 0 and 10 do not exist, the repeated 5 is already taken.
    let replay = Replay::run(&GameConfig::default(), &[0, 5, 5, 10]);
    let board = replay.board();
    assert_eq!(board.cells().iter().filter(|c| !c.is_empty()).count(), 1);
    assert_eq!(board.current_symbol().as_str(), "O");
}

#[test]
fn test_replay_moves_after_win_are_ignored() {
    let replay = Replay::run(&GameConfig::default(), &[1, 4, 2, 5, 3, 9]);
    assert_eq!(replay.announcements().len(), 1);
    assert!(replay.board().cells()[8].is_empty());
}

#[test]
fn test_replay_json_snapshot() {
    let replay = Replay::run(&GameConfig::default(), &[1, 2, 5, 3, 9]);
    let json: serde_json::Value =
        serde_json::from_str(&replay.to_json().expect("serializes")).expect("valid json");
    assert_eq!(json["board"]["locked"], true);
    assert_eq!(json["announcements"][0]["winner"], "X");
    assert_eq!(json["announcements"][0]["line"]["kind"], "Diagonal");
    assert_eq!(json["announcements"][0]["line"]["index"], 0);
}
