use tictactoe::{evaluate, Board, Mark, WIN_LINES};

/// Build a board directly from per-cell marks, ignoring play order.
/// `evaluate` must be total over unreachable boards too.
fn board_from(cells: [Option<Mark>; 9]) -> Board {
    let mut board = Board::new();
    for (i, cell) in cells.iter().enumerate() {
        if let Some(mark) = cell {
            board.place(i, *mark).unwrap();
        }
    }
    board
}

#[test]
fn test_empty_board_is_in_progress() {
    let outcome = evaluate(&Board::new());
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.line, None);
    assert!(!outcome.is_draw);
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for mark in [Mark::X, Mark::O] {
        for line in &WIN_LINES {
            let mut board = Board::new();
            for &i in line {
                board.place(i, mark).unwrap();
            }
            let outcome = evaluate(&board);
            assert_eq!(outcome.winner, Some(mark), "line {:?}", line);
            assert_eq!(outcome.line, Some(*line));
            assert!(!outcome.is_draw);
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    use Mark::{O, X};
    // X O X / O X O / O X O: no completed line anywhere
    let board = board_from([
        Some(X),
        Some(O),
        Some(X),
        Some(O),
        Some(X),
        Some(O),
        Some(O),
        Some(X),
        Some(O),
    ]);
    let outcome = evaluate(&board);
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.line, None);
    assert!(outcome.is_draw);
}

#[test]
fn test_partial_board_is_not_a_draw() {
    use Mark::{O, X};
    // eight cells filled, no line, one cell open: still in progress
    let board = board_from([
        Some(X),
        Some(O),
        Some(X),
        Some(O),
        Some(X),
        Some(O),
        Some(O),
        Some(X),
        None,
    ]);
    let outcome = evaluate(&board);
    assert_eq!(outcome.winner, None);
    assert!(!outcome.is_draw);
}

#[test]
fn test_full_board_with_line_is_a_win_not_a_draw() {
    use Mark::{O, X};
    // X X X / O O X / O X O: top row completed on the last move
    let board = board_from([
        Some(X),
        Some(X),
        Some(X),
        Some(O),
        Some(O),
        Some(X),
        Some(O),
        Some(X),
        Some(O),
    ]);
    let outcome = evaluate(&board);
    assert_eq!(outcome.winner, Some(X));
    assert_eq!(outcome.line, Some([0, 1, 2]));
    assert!(!outcome.is_draw);
}

#[test]
fn test_first_line_in_enumeration_order_wins() {
    use Mark::{O, X};
    // unreachable board where both marks hold a line; the row for O comes
    // before the row for X in WIN_LINES
    let board = board_from([
        Some(O),
        Some(O),
        Some(O),
        Some(X),
        Some(X),
        Some(X),
        None,
        None,
        None,
    ]);
    let outcome = evaluate(&board);
    assert_eq!(outcome.winner, Some(O));
    assert_eq!(outcome.line, Some([0, 1, 2]));
}

#[test]
fn test_evaluate_is_deterministic() {
    use Mark::{O, X};
    let board = board_from([
        Some(X),
        None,
        Some(O),
        None,
        Some(X),
        None,
        Some(O),
        None,
        Some(X),
    ]);
    assert_eq!(evaluate(&board), evaluate(&board));
}
