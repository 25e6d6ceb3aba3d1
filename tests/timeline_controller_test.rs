//! Tests for the history controller: branching, time travel and toggling.

use strictly_timeline::{
    GameController, IgnoreReason, MoveOutcome, Player, Position, Square, Status, derive_view,
};

fn play(game: &mut GameController, indices: &[usize]) {
    for &i in indices {
        let outcome = game.apply_index(i).expect("index in range");
        assert!(outcome.is_applied(), "move {} was ignored: {:?}", i, outcome);
    }
}

#[test]
fn test_marks_follow_move_order() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 8, 1, 2]);

    let board = game.board();
    assert_eq!(board.display(), "X|O|X\n-+-+-\n4|O|6\n-+-+-\n7|8|X");
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    // O holds the center, so no line is complete yet.
    assert_eq!(game.winner(), None);
    assert_eq!(derive_view(&game).status(), &Status::NextPlayer(Player::O));
}

#[test]
fn test_diagonal_win_blocks_further_moves() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 4, 2, 8]);

    let win = game.winner().expect("X completed the diagonal");
    assert_eq!(win.mark, Player::X);
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );

    let len = game.history().len();
    let outcome = game.apply_move(Position::BottomLeft);
    assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::GameWon(Player::X)));
    assert_eq!(game.history().len(), len);
    assert_eq!(game.current_step(), len - 1);
}

#[test]
fn test_finished_game_stays_navigable() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 4, 2, 8]);

    game.jump_to(4).expect("step exists");
    assert_eq!(game.winner(), None);
    assert_eq!(game.next_player(), Player::X);

    // A different final move starts a new branch and drops the winning one.
    play(&mut game, &[6]);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.current().position(), Some(Position::BottomLeft));
    assert_eq!(game.winner(), None);
}

#[test]
fn test_branch_on_write_truncates() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 2, 3, 5]);
    assert_eq!(game.history().len(), 6);

    game.jump_to(2).expect("step exists");
    assert_eq!(game.history().len(), 6, "jumping never changes history");

    play(&mut game, &[8]);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_step(), 3);
    assert!(game.is_linear());
    assert!(game.board().is_empty(Position::TopRight));
}

#[test]
fn test_jump_parity() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 2]);
    for step in 0..game.history().len() {
        game.jump_to(step).expect("step exists");
        let expected = if step % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.next_player(), expected);
        assert_eq!(game.current_step(), step);
    }
}

#[test]
fn test_toggle_then_move_follows_reversed_storage() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4]);
    game.toggle_order();

    // Step 2 now addresses the starting board.
    assert_eq!(game.current_step(), 2);
    assert!(game.current().is_origin());

    let outcome = game.apply_move(Position::BottomRight);
    assert_eq!(outcome, MoveOutcome::Applied { step: 3 });

    let positions: Vec<_> = game.history().iter().map(|s| s.position()).collect();
    assert_eq!(
        positions,
        [
            Some(Position::Center),
            Some(Position::TopLeft),
            None,
            Some(Position::BottomRight),
        ]
    );
    // The new snapshot was built on the empty board.
    assert_eq!(game.board().occupied_count(), 1);
    assert_eq!(
        game.board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert!(!game.is_linear());

    let view = derive_view(&game);
    let descriptions: Vec<_> = view.moves().iter().map(|m| m.description().clone()).collect();
    assert_eq!(
        descriptions,
        [
            "Go to move #3 (2, 2)",
            "Go to move #2 (1, 1)",
            "Go to move #1",
            "Go to game start",
        ]
    );
    assert!(*view.moves()[3].is_current());
}

#[test]
fn test_toggle_then_move_truncates_reversed_tail() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 8]);
    game.toggle_order();
    game.jump_to(1).expect("step exists");

    // Storage is [m3, m2, m1, start]; playing from step 1 drops m1 and start.
    assert_eq!(game.current().position(), Some(Position::Center));
    assert_eq!(game.next_player(), Player::O);
    play(&mut game, &[2]);
    assert_eq!(game.history().len(), 3);
    assert!(game.history().iter().all(|s| !s.is_origin()));
    assert_eq!(game.board().get(Position::TopRight), Square::Occupied(Player::O));
}
