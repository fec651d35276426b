//! Tests for score tracking driven by real games.

use tactix::{GameState, Outcome, Player, ScoreBoard};

/// Plays a sequence of cell indices and returns the final outcome.
fn play(indices: &[usize]) -> Outcome {
    let mut game = GameState::new();
    let mut outcome = Outcome::InProgress;
    for &index in indices {
        outcome = game.apply_index(index).expect("valid move");
    }
    outcome
}

#[test]
fn test_x_win_recorded_once() {
    let mut scores = ScoreBoard::new();
    let outcome = play(&[0, 3, 1, 4, 2]);
    assert_eq!(outcome.winner(), Some(Player::X));

    scores.record(&outcome);
    assert_eq!(*scores.wins_x(), 1);
    assert_eq!(*scores.wins_o(), 0);
    assert_eq!(*scores.draws(), 0);
}

#[test]
fn test_draw_recorded_once() {
    let mut scores = ScoreBoard::new();
    let outcome = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(outcome, Outcome::Draw);

    scores.record(&outcome);
    assert_eq!(*scores.draws(), 1);
    assert_eq!(scores.total_games(), 1);
}

#[test]
fn test_scores_survive_board_reset() {
    let mut game = GameState::new();
    let mut scores = ScoreBoard::new();

    for index in [0, 3, 1, 4, 2] {
        game.apply_index(index).expect("valid move");
    }
    scores.record(&game.outcome());

    game.reset();
    assert_eq!(game, GameState::new());
    assert_eq!(*scores.wins_x(), 1);

    // A second game feeds the same scoreboard.
    for index in [1, 0, 2, 3, 7, 6] {
        game.apply_index(index).expect("valid move");
    }
    scores.record(&game.outcome());
    assert_eq!(*scores.wins_x(), 1);
    assert_eq!(*scores.wins_o(), 1);
    assert_eq!(scores.total_games(), 2);
}

#[test]
fn test_recording_mid_game_changes_nothing() {
    let mut game = GameState::new();
    let mut scores = ScoreBoard::new();

    for index in [0, 3, 1] {
        let outcome = game.apply_index(index).expect("valid move");
        scores.record(&outcome);
    }
    assert_eq!(scores, ScoreBoard::new());
}

#[test]
fn test_scoreboard_serde_round_trip() {
    let mut scores = ScoreBoard::new();
    scores.record(&play(&[0, 3, 1, 4, 2]));
    scores.record(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]));

    let json = serde_json::to_string(&scores).expect("serialize");
    let restored: ScoreBoard = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, scores);
}
