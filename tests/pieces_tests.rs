//! Pieces tests - catalog and rotation periodicity

use tetris_hint::core::{get_shape, Piece, CATALOG};
use tetris_hint::types::PieceKind;

fn sorted_cells(piece: &Piece) -> Vec<(i8, i8)> {
    let mut cells = piece.cells().to_vec();
    cells.sort();
    cells
}

#[test]
fn test_catalog_is_indexed_by_kind() {
    for kind in PieceKind::ALL {
        assert_eq!(get_shape(kind).kind, kind);
    }
    assert_eq!(CATALOG.len(), PieceKind::ALL.len());
}

#[test]
fn test_symmetry_orders() {
    let order = |kind| Piece::spawn(kind).symmetry();
    assert_eq!(order(PieceKind::O), 1);
    assert_eq!(order(PieceKind::I), 2);
    assert_eq!(order(PieceKind::S), 2);
    assert_eq!(order(PieceKind::Z), 2);
    assert_eq!(order(PieceKind::J), 4);
    assert_eq!(order(PieceKind::L), 4);
    assert_eq!(order(PieceKind::T), 4);
}

#[test]
fn test_four_quarter_turns_restore_every_piece() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.moved(0, 0, 4), piece, "{kind:?}");
    }
}

#[test]
fn test_order_four_pieces_differ_at_every_turn() {
    for kind in [PieceKind::J, PieceKind::L, PieceKind::T] {
        let base = Piece::spawn(kind);
        let shapes: Vec<_> = (0..4).map(|r| sorted_cells(&base.moved(0, 0, r))).collect();
        for a in 0..4 {
            for b in a + 1..4 {
                assert_ne!(shapes[a], shapes[b], "{kind:?} turns {a} and {b}");
            }
        }
    }
}

#[test]
fn test_order_two_pieces_have_two_distinct_orientations() {
    for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
        let base = Piece::spawn(kind);
        assert_ne!(sorted_cells(&base), sorted_cells(&base.moved(0, 0, 1)));
        assert_eq!(base.moved(0, 0, 2).moved(0, 0, 2), base);
    }
}

#[test]
fn test_o_never_rotates() {
    let o = Piece::spawn(PieceKind::O);
    for r in 0..4 {
        assert_eq!(o.moved(0, 0, r), o);
    }
}

#[test]
fn test_i_turns_horizontal() {
    let i = Piece::spawn(PieceKind::I).moved(0, 0, 1);
    let cells = i.cells();
    assert!(cells.iter().all(|&(_, y)| y == i.y));
    assert_eq!(sorted_cells(&i), vec![(3, 2), (4, 2), (5, 2), (6, 2)]);
}
