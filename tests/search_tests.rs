//! Move search tests - enumeration, simulation, scoring and selection

use tetris_hint::core::{Board, Piece};
use tetris_hint::engine::eval::{bumpiness, column_heights};
use tetris_hint::engine::{
    best_move, candidates, evaluate, ranked_moves, scored_moves, simulate, Candidate, EvalWeights,
};
use tetris_hint::types::{PieceKind, MAX_SHIFT, MIN_SHIFT};

#[test]
fn test_candidates_are_rotation_major() {
    let list = candidates(&Piece::spawn(PieceKind::T));
    assert_eq!(list[0], Candidate::new(0, MIN_SHIFT));
    assert_eq!(list[9], Candidate::new(0, MAX_SHIFT));
    assert_eq!(list[10], Candidate::new(1, MIN_SHIFT));
}

#[test]
fn test_flat_board_has_zero_bumpiness() {
    let board = Board::from_rows(&["##########", "##########"]).unwrap();
    assert_eq!(bumpiness(&column_heights(&board)), 0);
    assert_eq!(evaluate(&Board::new(), 0), 0);
}

#[test]
fn test_o_on_empty_board_goes_to_left_wall() {
    let best = best_move(&Piece::spawn(PieceKind::O), &Board::new()).unwrap();
    assert_eq!(best.rotation(), 0);
    assert_eq!(best.shift(), -4);
    assert_eq!(best.score, -4);
    assert_eq!(best.lines_cleared, 0);
}

#[test]
fn test_i_fills_interior_gap() {
    let board = Board::from_rows(&["######.###"]).unwrap();
    let piece = Piece::spawn(PieceKind::I);

    let best = best_move(&piece, &board).unwrap();
    assert_eq!(best.candidate, Candidate::new(0, 2));
    assert_eq!(best.lines_cleared, 1);
    assert_eq!(best.score, 28);

    // Strict maximum: no other candidate reaches the same score.
    let moves = scored_moves(&piece, &board, &EvalWeights::default());
    assert_eq!(moves.iter().filter(|m| m.score == best.score).count(), 1);
}

#[test]
fn test_simulation_leaves_inputs_untouched() {
    let board = Board::from_rows(&["######.###"]).unwrap();
    let piece = Piece::spawn(PieceKind::I);
    let snapshot = (board, piece);

    let result = simulate(&board, &piece, Candidate::new(0, 2)).unwrap();
    assert_eq!(result.lines_cleared, 1);
    assert_eq!(result.board.column_height(6), 3);
    assert_eq!((board, piece), snapshot);
}

#[test]
fn test_out_of_window_shifts_are_rejected() {
    // O at shift +5 would put its right column past the wall.
    assert!(simulate(&Board::new(), &Piece::spawn(PieceKind::O), Candidate::new(0, 5)).is_none());
}

#[test]
fn test_danger_zone_penalty_steers_the_search() {
    // Column 4 filled up to row 4: a vertical I there would reach the danger zone.
    let rows = vec!["....#....."; 16];
    let board = Board::from_rows(&rows).unwrap();
    let piece = Piece::spawn(PieceKind::I);

    let moves = scored_moves(&piece, &board, &EvalWeights::default());
    let stacked = moves
        .iter()
        .find(|m| m.candidate == Candidate::new(0, 0))
        .unwrap();
    assert!(stacked.score < -2000);

    let best = best_move(&piece, &board).unwrap();
    assert_ne!(best.candidate, Candidate::new(0, 0));
    assert!(best.score > -2000);
}

#[test]
fn test_ranked_moves_are_sorted_and_bounded() {
    let board = Board::from_rows(&["#.##.###..", "####.####."]).unwrap();
    let piece = Piece::spawn(PieceKind::L);
    let ranked = ranked_moves(&piece, &board, 5);
    assert_eq!(ranked.len(), 5);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(Some(ranked[0]), best_move(&piece, &board));
}
