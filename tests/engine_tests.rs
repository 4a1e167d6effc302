use tictactoe::{GameEngine, GameError, GameStatus, Intent, Mark};

/// Drive a sequence of placements, asserting each one is accepted.
fn play_moves(engine: &mut GameEngine, moves: &[usize]) {
    for &index in moves {
        engine.place_mark(index).unwrap();
    }
}

#[test]
fn test_new_engine_view() {
    let engine = GameEngine::new();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.next_mark(), Mark::X);
    assert_eq!(engine.current_step(), 0);

    let view = engine.view();
    assert!(view.board.iter().all(|cell| cell.is_empty()));
    assert_eq!(view.status_text, "Next player: X");
    assert_eq!(view.winning_line, None);
    assert!(view.is_ascending);
    assert_eq!(view.move_list.len(), 1);
    assert_eq!(view.move_list[0].label, "Go to game start");
    assert_eq!(view.move_list[0].step, 0);
}

#[test]
fn test_marks_alternate_starting_with_x() {
    let mut engine = GameEngine::new();
    play_moves(&mut engine, &[0, 1, 2, 3]);

    let board = engine.board();
    assert_eq!(board.cell(0), Some(Mark::X));
    assert_eq!(board.cell(1), Some(Mark::O));
    assert_eq!(board.cell(2), Some(Mark::X));
    assert_eq!(board.cell(3), Some(Mark::O));
    assert_eq!(engine.next_mark(), Mark::X);
    assert_eq!(engine.view().status_text, "Next player: X");
}

#[test]
fn test_diagonal_win() {
    let mut engine = GameEngine::new();
    // X takes the 0-4-8 diagonal; O answers on side cells
    play_moves(&mut engine, &[0, 1, 4, 3, 8]);

    assert_eq!(engine.status(), GameStatus::Won);
    let outcome = engine.outcome();
    assert_eq!(outcome.winner, Some(Mark::X));
    assert_eq!(outcome.line, Some([0, 4, 8]));

    let view = engine.view();
    assert_eq!(view.status_text, "Winner: X");
    assert_eq!(view.winning_line, Some([0, 4, 8]));

    // placements after the win are rejected and change nothing
    let before = engine.clone();
    assert_eq!(engine.place_mark(2).unwrap_err(), GameError::GameConcluded);
    assert_eq!(engine.place_mark(6).unwrap_err(), GameError::GameConcluded);
    assert_eq!(engine, before);
}

#[test]
fn test_draw_game() {
    let mut engine = GameEngine::new();
    // X O X / X O O / O X X, filled without ever completing a line
    play_moves(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(engine.status(), GameStatus::Drawn);
    assert_eq!(engine.view().status_text, "Draw");
    assert_eq!(engine.outcome().winner, None);
    assert_eq!(engine.place_mark(0).unwrap_err(), GameError::GameConcluded);
}

#[test]
fn test_occupied_cell_is_rejected_without_side_effects() {
    let mut engine = GameEngine::new();
    play_moves(&mut engine, &[4]);

    let before = engine.clone();
    assert_eq!(
        engine.place_mark(4).unwrap_err(),
        GameError::CellOccupied { index: 4 }
    );
    assert_eq!(engine, before);
    // the failed O move is not consumed; O is still next
    assert_eq!(engine.next_mark(), Mark::O);
}

#[test]
fn test_out_of_range_cell_is_rejected() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.place_mark(9).unwrap_err(),
        GameError::OutOfRange { index: 9, limit: 9 }
    );
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_jump_to_out_of_range_step() {
    let mut engine = GameEngine::new();
    play_moves(&mut engine, &[0, 1]);
    assert_eq!(
        engine.jump_to(3).unwrap_err(),
        GameError::OutOfRange { index: 3, limit: 3 }
    );
    assert_eq!(engine.current_step(), 2);
}

#[test]
fn test_jump_is_non_destructive() {
    let mut engine = GameEngine::new();
    play_moves(&mut engine, &[0, 1, 2]);

    engine.jump_to(1).unwrap();
    assert_eq!(engine.current_step(), 1);
    // snapshots beyond the cursor stay in memory until the next append
    assert_eq!(engine.history().len(), 4);
    assert_eq!(engine.board().cell(1), None);
    assert_eq!(engine.next_mark(), Mark::O);

    engine.jump_to(3).unwrap();
    assert_eq!(engine.board().cell(2), Some(Mark::X));
}

#[test]
fn test_branching_discards_abandoned_future() {
    let mut engine = GameEngine::new();
    play_moves(&mut engine, &[0, 1]);
    assert_eq!(engine.history().len(), 3);

    engine.jump_to(0).unwrap();
    engine.place_mark(4).unwrap();

    // the moves at cells 0 and 1 are gone; the new branch holds X at 4
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.current_step(), 1);
    assert_eq!(engine.board().cell(0), None);
    assert_eq!(engine.board().cell(4), Some(Mark::X));
    assert_eq!(engine.next_mark(), Mark::O);

    // steps of the abandoned branch are no longer reachable
    assert_eq!(
        engine.jump_to(2).unwrap_err(),
        GameError::OutOfRange { index: 2, limit: 2 }
    );
}

#[test]
fn test_jump_is_permitted_after_a_win() {
    let mut engine = GameEngine::new();
    play_moves(&mut engine, &[0, 1, 4, 3, 8]);
    assert_eq!(engine.status(), GameStatus::Won);

    engine.jump_to(0).unwrap();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.view().status_text, "Next player: X");

    engine.jump_to(5).unwrap();
    assert_eq!(engine.status(), GameStatus::Won);
}

#[test]
fn test_move_list_labels() {
    let mut engine = GameEngine::new();
    play_moves(&mut engine, &[0, 4, 8]);

    let view = engine.view();
    let labels: Vec<&str> = view
        .move_list
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    assert_eq!(
        labels,
        [
            "Go to game start",
            "Go to move #1: X (1, 1)",
            "Go to move #2: O (2, 2)",
            "Go to move #3: X (3, 3)",
        ]
    );
}

#[test]
fn test_toggle_sort_reverses_presentation_only() {
    let mut engine = GameEngine::new();
    play_moves(&mut engine, &[0, 1, 2]);

    let ascending = engine.view();
    engine.toggle_sort();
    let descending = engine.view();

    assert!(!descending.is_ascending);
    let mut reversed = descending.move_list.clone();
    reversed.reverse();
    assert_eq!(reversed, ascending.move_list);

    // history and derived game state are untouched
    assert_eq!(engine.current_step(), 3);
    assert_eq!(engine.history().len(), 4);
    assert_eq!(engine.status(), GameStatus::InProgress);

    // a second toggle restores the original order
    engine.toggle_sort();
    assert_eq!(engine.view(), ascending);
}

#[test]
fn test_apply_dispatches_intents() {
    let mut engine = GameEngine::new();

    let view = engine.apply(Intent::PlaceMark(4)).unwrap();
    assert_eq!(view.board[4], "X");
    assert_eq!(view.status_text, "Next player: O");

    let view = engine.apply(Intent::ToggleSort).unwrap();
    assert!(!view.is_ascending);

    let view = engine.apply(Intent::JumpTo(0)).unwrap();
    assert_eq!(view.status_text, "Next player: X");
    assert!(view.board.iter().all(|cell| cell.is_empty()));

    assert_eq!(
        engine.apply(Intent::JumpTo(7)).unwrap_err(),
        GameError::OutOfRange { index: 7, limit: 2 }
    );
}
