//! Tests for the game session driver.

use noughts::{AppConfig, ConfigOverrides, GameSession, GameStatus, InvalidMove, Mark, Position};

fn config(computer_first: bool) -> AppConfig {
    AppConfig::default()
        .with_overrides(ConfigOverrides {
            think_delay_ms: Some(0),
            computer_first: Some(computer_first),
            ..Default::default()
        })
        .unwrap()
}

#[test]
fn test_two_phase_turn() {
    let mut session = GameSession::new(&config(false));
    assert_eq!(session.status_message(), "Your turn");
    assert!(!session.is_computer_turn());
    assert_eq!(session.computer_move(), Ok(None));

    session.human_move(Position::new(1, 1)).unwrap();
    assert!(session.is_computer_turn());
    assert_eq!(session.status_message(), "Computer's turn");

    let reply = session.computer_move().unwrap().expect("computer replies");
    assert_eq!(session.state().mark_at(reply), Some(Mark::Computer));
    assert_eq!(session.status_message(), "Your turn");
}

#[test]
fn test_human_cannot_move_twice() {
    let mut session = GameSession::new(&config(false));
    session.human_move(Position::new(0, 0)).unwrap();
    assert!(matches!(
        session.human_move(Position::new(2, 2)),
        Err(InvalidMove::NotYourTurn { .. })
    ));
}

#[test]
fn test_computer_wins_message() {
    let mut session = GameSession::new(&config(false));
    // Ignore the threats: edge, edge, edge.
    for position in [Position::new(0, 1), Position::new(1, 0), Position::new(2, 1)] {
        if session.state().is_over() {
            break;
        }
        if session.human_move(position).is_ok() {
            session.computer_move().unwrap();
        }
    }
    while !session.state().is_over() {
        let position = session.state().empty_positions()[0];
        session.human_move(position).unwrap();
        session.computer_move().unwrap();
    }
    assert_ne!(session.state().status(), GameStatus::Won(Mark::Human));
    match session.state().status() {
        GameStatus::Won(Mark::Computer) => assert_eq!(session.status_message(), "Computer wins!"),
        GameStatus::Drawn => assert_eq!(session.status_message(), "It's a draw!"),
        other => panic!("unexpected status {other:?}"),
    }
}

#[test]
fn test_restart_replaces_game() {
    let mut session = GameSession::new(&config(false));
    session.human_move(Position::new(0, 0)).unwrap();
    session.computer_move().unwrap();
    assert_eq!(session.games_started(), 1);

    session.restart();
    assert_eq!(session.games_started(), 2);
    assert_eq!(session.state().board().count(Mark::Empty), 9);
    assert!(session.state().history().is_empty());
    assert_eq!(session.status_message(), "Your turn");
}

#[test]
fn test_computer_first_session() {
    let mut session = GameSession::new(&config(true));
    assert!(session.is_computer_turn());
    assert_eq!(session.computer_move(), Ok(Some(Position::new(0, 0))));

    session.restart();
    assert!(session.is_computer_turn());
}
